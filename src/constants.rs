//! Constants used throughout the scaffolder

/// Product name shown in the banner and status messages
pub const APP_NAME: &str = "TouchCLI";

/// Title rendered by the banner
pub const BANNER_TITLE: &str = "touchcli";

/// Remote template cloned into every new project
pub const TEMPLATE_URL: &str = "https://github.com/weebwashere/daisyui-sveltekit-jaqdxv.git";

/// Project name used when none is given
pub const DEFAULT_PROJECT_NAME: &str = "bot";

/// Version-control metadata directory stripped from the clone
pub const GIT_DIR: &str = ".git";

/// Dependency installation command, run inside the new project
pub const INSTALL_COMMAND: &[&str] = &["npm", "install"];

/// Command suggested to start the new project
pub const START_COMMAND: &str = "npm start";

/// Interactive prompt texts
pub mod prompts {
    pub const PROJECT_NAME: &str =
        "What do you want your project name to be? (Press Enter for default 'bot')";
    pub const INSTALL_DEPENDENCIES: &str = "Install dependencies? (Y/n)";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
