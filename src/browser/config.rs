use std::path::PathBuf;

/// Environment variable that switches the browser into CI mode
pub const CI_ENV: &str = "CI";

/// Options for launching a new browser instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Run browser without a visible window
    pub headless: bool,

    /// Keep Chrome's sandbox enabled (containers usually need it off)
    pub sandbox: bool,

    pub window_width: u32,
    pub window_height: u32,

    /// Chrome binary path; auto-detected when `None`
    pub chrome_path: Option<PathBuf>,

    /// Pass `--disable-dev-shm-usage` (small /dev/shm in containers)
    pub disable_dev_shm: bool,

    /// Pass `--disable-gpu`
    pub disable_gpu: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: true,
            window_width: 1280,
            window_height: 800,
            chrome_path: None,
            disable_dev_shm: false,
            disable_gpu: false,
        }
    }
}

impl LaunchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fully headless, sandboxless, fixed 1920x1080 window
    pub fn ci() -> Self {
        Self {
            headless: true,
            sandbox: false,
            window_width: 1920,
            window_height: 1080,
            chrome_path: None,
            disable_dev_shm: true,
            disable_gpu: true,
        }
    }

    /// CI preset when `CI` is set, an interactive (headed) window otherwise
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LaunchOptions::from_env`] with an injectable variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(CI_ENV) {
            Some(value) if !value.is_empty() => Self::ci(),
            _ => Self::new().headless(false),
        }
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_options_builder() {
        let opts = LaunchOptions::new().headless(false).window_size(800, 600).sandbox(false);

        assert!(!opts.headless);
        assert!(!opts.sandbox);
        assert_eq!(opts.window_width, 800);
        assert_eq!(opts.window_height, 600);
    }

    #[test]
    fn test_from_lookup_ci() {
        let opts = LaunchOptions::from_lookup(|key| (key == "CI").then(|| "true".to_string()));

        assert_eq!(opts, LaunchOptions::ci());
        assert!(opts.headless);
        assert!(!opts.sandbox);
        assert!(opts.disable_dev_shm);
        assert!(opts.disable_gpu);
        assert_eq!((opts.window_width, opts.window_height), (1920, 1080));
    }

    #[test]
    fn test_from_lookup_interactive() {
        let opts = LaunchOptions::from_lookup(|_| None);
        assert!(!opts.headless);
        assert!(opts.sandbox);

        let empty = LaunchOptions::from_lookup(|_| Some(String::new()));
        assert!(!empty.headless);
    }
}
