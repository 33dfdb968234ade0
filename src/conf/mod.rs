mod loader;
mod model;
mod paths;

pub use loader::{merge_entries, merge_file, parse, parse_line, strip_quotes};
pub use model::{DEFAULT_PROMPT, DEBUG_ENV, PROMPT_ENV, QUIET_ENV, SENTINEL_ENV, Settings, is_true};
pub use paths::{
    COMPLETION_DIR_ENV, CONFIG_PATH_ENV, HISTORY_DIR_ENV, absolute, expand_path, home_dir,
    resolve_completion_dir, resolve_config_path, resolve_history_dir,
};
