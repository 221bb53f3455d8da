//! JSON types for the Solana Actions protocol (v2.x).
//!
//! These mirror the `@solana/actions` shapes that action clients
//! (wallets, dial.to, chat embeds) expect. Only the fields this
//! service produces or consumes are modeled.

use serde::{Deserialize, Serialize};

/// `/actions.json` manifest mapping human paths to action API paths.
#[derive(Debug, Serialize)]
pub struct ActionsJson {
    pub rules: Vec<ActionRule>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRule {
    pub path_pattern: String,
    pub api_path: String,
}

/// Discovery payload: describes one action and how to invoke it.
#[derive(Debug, Serialize)]
pub struct ActionGetResponse {
    pub title: String,
    pub icon: String,
    pub description: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ActionLinks>,
}

#[derive(Debug, Serialize)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

#[derive(Debug, Serialize)]
pub struct LinkedAction {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub href: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ActionParameter>>,
}

impl LinkedAction {
    pub fn transaction(href: String, label: impl Into<String>) -> Self {
        Self {
            kind: "transaction",
            href,
            label: label.into(),
            parameters: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActionParameter {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
}

/// Body of a build (phase 1) POST from the client.
#[derive(Debug, Deserialize)]
pub struct ActionPostRequest {
    pub account: Option<String>,
}

/// Build response: the unsigned transaction plus the confirm link.
#[derive(Debug, Serialize)]
pub struct ActionPostResponse {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Base64-encoded serialized transaction, unsigned.
    pub transaction: String,
    pub links: PostResponseLinks,
}

impl ActionPostResponse {
    pub fn transaction(transaction: String, next_href: String) -> Self {
        Self {
            kind: "transaction",
            transaction,
            links: PostResponseLinks {
                next: NextActionLink {
                    kind: "post",
                    href: next_href,
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostResponseLinks {
    pub next: NextActionLink,
}

#[derive(Debug, Serialize)]
pub struct NextActionLink {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub href: String,
}

/// Body of a confirm (phase 2) POST from the client.
#[derive(Debug, Deserialize)]
pub struct NextActionPostRequest {
    pub signature: Option<String>,
}

/// Terminal payload once a flow has resolved.
#[derive(Debug, Serialize)]
pub struct CompletedAction {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: String,
    pub icon: String,
    pub label: String,
    pub description: String,
}

impl CompletedAction {
    pub fn new(
        title: impl Into<String>,
        icon: String,
        label: impl Into<String>,
        description: String,
    ) -> Self {
        Self {
            kind: "completed",
            title: title.into(),
            icon,
            label: label.into(),
            description,
        }
    }
}

/// Uniform error body for every failure surfaced to a client.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_action_serializes_with_type_tag() {
        let action = LinkedAction::transaction("/api/actions/new".into(), "Create");
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "transaction");
        assert_eq!(json["href"], "/api/actions/new");
        assert!(json.get("parameters").is_none());
    }

    #[test]
    fn post_response_carries_next_link() {
        let resp = ActionPostResponse::transaction("dGVzdA==".into(), "/api/actions/new/confirm".into());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["type"], "transaction");
        assert_eq!(json["links"]["next"]["type"], "post");
        assert_eq!(json["links"]["next"]["href"], "/api/actions/new/confirm");
    }

    #[test]
    fn completed_action_is_type_completed() {
        let done = CompletedAction::new("Correct!", "icon".into(), "Correct!", "desc".into());
        let json = serde_json::to_value(&done).unwrap();
        assert_eq!(json["type"], "completed");
    }

    #[test]
    fn rule_serializes_camel_case() {
        let rule = ActionRule {
            path_pattern: "/new/**".into(),
            api_path: "/api/actions/new/**".into(),
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["pathPattern"], "/new/**");
        assert_eq!(json["apiPath"], "/api/actions/new/**");
    }
}
