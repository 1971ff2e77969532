use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_poll_interval() -> Duration {
    Duration::from_secs(1)
}

const fn default_timeout() -> Duration {
    Duration::from_secs(10 * 60)
}

/// How long to wait for asynchronous tasks, and how often to ask.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TaskConfig {
    /// Delay between two `task.get_status` calls.
    #[serde(default = "default_poll_interval", with = "humanize::duration::serde")]
    pub poll_interval: Duration,

    /// Give up waiting after this long. The task keeps running on the
    /// server.
    #[serde(default = "default_timeout", with = "humanize::duration::serde")]
    pub timeout: Duration,
}

impl Default for TaskConfig {
    fn default() -> Self {
        TaskConfig {
            poll_interval: default_poll_interval(),
            timeout: default_timeout(),
        }
    }
}

impl TaskConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
