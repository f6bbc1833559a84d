//! Blocking entry points for call sites that cannot suspend.
//!
//! Blocking directly on an ambient tokio runtime would deadlock: the
//! delegation future needs that same runtime to make progress. When a
//! runtime is detected, the pipeline runs on a dedicated thread with its
//! own single-threaded runtime, and the caller blocks on a channel with an
//! outer timeout that is separate from the inner polling budget.

use std::sync::mpsc;

use tokio::runtime::{Builder, Handle};
use tracing::warn;

use crate::client::DelegationClient;
use crate::error::DelegateError;

impl DelegationClient {
    /// Blocking form of [`DelegationClient::delegate`]. Never fails; every
    /// failure, including the bridge's own timeout, comes back as an
    /// `"Error: ..."` string.
    pub fn delegate_blocking(&self, agent_name: &str, task_description: &str) -> String {
        match Handle::try_current() {
            Ok(_) => self.delegate_on_worker(agent_name, task_description),
            Err(_) => match Builder::new_current_thread().enable_all().build() {
                Ok(rt) => rt.block_on(self.delegate(agent_name, task_description)),
                Err(e) => format!("Error: {agent_name}: failed to build delegation runtime: {e}"),
            },
        }
    }

    /// Run the pipeline on an isolated worker thread with its own runtime
    /// and block on its result with the outer bridge timeout.
    fn delegate_on_worker(&self, agent_name: &str, task_description: &str) -> String {
        let client = self.clone();
        let agent = agent_name.to_string();
        let task = task_description.to_string();
        let timeout = self.bridge_timeout();

        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let result = match Builder::new_current_thread().enable_all().build() {
                Ok(rt) => rt.block_on(client.delegate(&agent, &task)),
                Err(e) => format!("Error: {agent}: failed to build delegation runtime: {e}"),
            };
            // The receiver may have given up already; nothing to do then.
            let _ = tx.send(result);
        });

        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(_) => {
                warn!(agent = %agent_name, ?timeout, "blocking delegation worker timed out");
                format!(
                    "Error: {agent_name}: {}",
                    DelegateError::BridgeTimeout(timeout)
                )
            }
        }
    }
}
