//! Common constants used throughout fsdgen.

/// Supported configuration file names, tried in order
pub const CONFIG_FILES: [&str; 3] = ["fsdgen.json", "fsdgen.yml", "fsdgen.yaml"];

/// Pattern every component name has to match
pub const COMPONENT_NAME_PATTERN: &str = r"^[A-Z][a-zA-Z0-9]*$";

/// Import path of the shared HTTP client used by generated services
pub const DEFAULT_API_CLIENT_IMPORT: &str = "@/shared/api/axiosClient";

/// Segments created inside every feature slice
pub const SLICE_SEGMENTS: [&str; 5] = ["ui", "api", "model", "lib", "config"];

/// Empty marker file that keeps otherwise empty directories under version control
pub const GITKEEP: &str = ".gitkeep";
