#![allow(dead_code)]

use std::path::PathBuf;

use pullwrap::invocation::PullOptions;

/// Builder for `PullOptions` to simplify test setup.
///
/// Starts with every optional flag switched off and strict host-key
/// checking on, so `build()` alone yields only the fixed arguments.
pub struct PullOptionsBuilder {
    opts: PullOptions,
}

impl PullOptionsBuilder {
    pub fn new() -> Self {
        Self {
            opts: PullOptions {
                inventory: PathBuf::from("/etc/ansible/inventory.sh"),
                destination: PathBuf::from("/var/lib/pullwrap/checkout"),
                url: "https://git.example.com/ops/playbooks.git".to_string(),
                branch: "master".to_string(),
                playbook: PathBuf::from("local.yml"),
                private_key: None,
                verbosity: 0,
                strict_host_key_checking: true,
                wait_interval: None,
                tags: None,
                skip_tags: None,
            },
        }
    }

    pub fn inventory(mut self, path: &str) -> Self {
        self.opts.inventory = PathBuf::from(path);
        self
    }

    pub fn destination(mut self, path: &str) -> Self {
        self.opts.destination = PathBuf::from(path);
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.opts.url = url.to_string();
        self
    }

    pub fn branch(mut self, branch: &str) -> Self {
        self.opts.branch = branch.to_string();
        self
    }

    pub fn playbook(mut self, path: &str) -> Self {
        self.opts.playbook = PathBuf::from(path);
        self
    }

    pub fn private_key(mut self, path: &str) -> Self {
        self.opts.private_key = Some(PathBuf::from(path));
        self
    }

    pub fn verbosity(mut self, level: u8) -> Self {
        self.opts.verbosity = level;
        self
    }

    pub fn accept_host_key(mut self) -> Self {
        self.opts.strict_host_key_checking = false;
        self
    }

    pub fn wait(mut self, seconds: u64) -> Self {
        self.opts.wait_interval = Some(seconds);
        self
    }

    pub fn tags(mut self, tags: &str) -> Self {
        self.opts.tags = Some(tags.to_string());
        self
    }

    pub fn skip_tags(mut self, tags: &str) -> Self {
        self.opts.skip_tags = Some(tags.to_string());
        self
    }

    pub fn build(self) -> PullOptions {
        self.opts
    }
}

impl Default for PullOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
