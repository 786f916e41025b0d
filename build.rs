use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Get the output directory from cargo
    let out_dir = env::var("OUT_DIR").unwrap();
    let _profile = env::var("PROFILE").unwrap();

    let target_dir = Path::new(&out_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf();

    // Copy config.toml to the build output directory
    fs::copy(Path::new("config.toml"), target_dir.join("config.toml")).unwrap();

    // Copy the scene files so exe-relative scene paths keep working
    let scenes_dest = target_dir.join("scenes");
    fs::create_dir_all(&scenes_dest).unwrap();
    for entry in fs::read_dir("scenes").unwrap() {
        let entry = entry.unwrap();
        if entry.path().is_file() {
            fs::copy(entry.path(), scenes_dest.join(entry.file_name())).unwrap();
        }
    }
}
