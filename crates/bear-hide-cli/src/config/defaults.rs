use std::path::PathBuf;

pub fn default_out_dir() -> PathBuf {
    PathBuf::from("/bask/apps/system/software/lmod/hide/")
}

pub fn default_environment() -> String {
    "live".to_string()
}

pub fn default_anchor_application() -> String {
    "GCCcore".to_string()
}

pub fn default_file_prefix() -> String {
    "gcc".to_string()
}

pub fn default_file_extension() -> String {
    ".lua".to_string()
}
