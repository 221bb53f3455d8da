pub mod confirm;
pub mod oracle;
pub mod rpc;
pub mod tx;
