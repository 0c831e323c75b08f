//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::{Command, Output};

fn run_modmap(cwd: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_modmap");
    Command::new(bin)
        .current_dir(cwd)
        .args(args)
        .env_remove("MODMAP_LOG")
        .env_remove("MODMAP_RECORD")
        .output()
        .expect("failed to run modmap binary")
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "").unwrap();
}

fn read(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative)).unwrap()
}

#[test]
fn discovers_headers_at_every_depth() {
    let tmp = tempfile::tempdir().unwrap();
    for file in ["src/a.h", "src/sub/b.h", "src/sub/sub2/c.h", "src/d.txt"] {
        touch(tmp.path(), file);
    }

    let output = run_modmap(
        tmp.path(),
        &["src", "Generated/Foo.h", "-m", "out/module.modulemap", "-v", "out/vfs.yaml"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    assert_eq!(
        read(tmp.path(), "out/module.modulemap"),
        "module src {\n    header \"a.h\"\n    header \"sub/b.h\"\n    \
         header \"sub/sub2/c.h\"\n    header \"Generated/Foo.h\"\n    \
         requires cplusplus\n    export *\n}\n"
    );
}

#[test]
fn empty_directory_lists_only_generated_files() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("Empty")).unwrap();

    let output = run_modmap(
        tmp.path(),
        &["Empty", "Generated/Foo.h", "-m", "module.modulemap", "-v", "vfs.yaml"],
    );
    assert!(output.status.success());

    let text = read(tmp.path(), "module.modulemap");
    assert_eq!(text.matches("    header ").count(), 1);
    assert!(text.contains("    header \"Generated/Foo.h\"\n"));
    assert!(text.ends_with("    requires cplusplus\n    export *\n}\n"));
}

#[test]
fn overlay_maps_virtual_path_to_module_map() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), "src/a.h");

    let output = run_modmap(
        tmp.path(),
        &["src", "Gen.h", "-m", "out/module.modulemap", "-v", "vfs.yaml"],
    );
    assert!(output.status.success());

    let overlay: serde_yaml::Value = serde_yaml::from_str(&read(tmp.path(), "vfs.yaml")).unwrap();
    assert_eq!(overlay["version"].as_u64(), Some(0));
    assert_eq!(overlay["use-external-names"].as_bool(), Some(false));
    let roots = overlay["roots"].as_sequence().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["name"].as_str(), Some("src/module.modulemap"));
    assert_eq!(roots[0]["type"].as_str(), Some("file"));
    assert_eq!(roots[0]["external-contents"].as_str(), Some("out/module.modulemap"));
}

#[test]
fn trailing_separator_yields_same_outputs() {
    let plain = tempfile::tempdir().unwrap();
    let slashed = tempfile::tempdir().unwrap();
    touch(plain.path(), "src/a.h");
    touch(slashed.path(), "src/a.h");

    let args = ["src", "Gen.h", "-m", "out/module.modulemap", "-v", "vfs.yaml"];
    assert!(run_modmap(plain.path(), &args).status.success());
    let args = ["src/", "Gen.h", "-m", "out/module.modulemap", "-v", "vfs.yaml"];
    assert!(run_modmap(slashed.path(), &args).status.success());

    assert_eq!(
        read(plain.path(), "out/module.modulemap"),
        read(slashed.path(), "out/module.modulemap")
    );
    assert_eq!(read(plain.path(), "vfs.yaml"), read(slashed.path(), "vfs.yaml"));
    assert!(read(slashed.path(), "vfs.yaml").contains("name: src/module.modulemap\n"));
}

#[test]
fn module_name_comes_from_final_component() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("x/y/MyModule");
    std::fs::create_dir_all(&dir).unwrap();
    let dir = dir.to_str().unwrap();

    let output = run_modmap(
        tmp.path(),
        &[dir, "Gen.h", "-m", "m/module.modulemap", "-v", "v.yaml"],
    );
    assert!(output.status.success());
    assert!(read(tmp.path(), "m/module.modulemap").starts_with("module MyModule {\n"));
}

#[test]
fn second_run_leaves_outputs_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), "src/a.h");
    let args = ["src", "Gen.h", "-m", "out/module.modulemap", "-v", "out/vfs.yaml"];

    assert!(run_modmap(tmp.path(), &args).status.success());
    let mtime = |p: &str| std::fs::metadata(tmp.path().join(p)).unwrap().modified().unwrap();
    let before = (mtime("out/module.modulemap"), mtime("out/vfs.yaml"));
    let contents = (read(tmp.path(), "out/module.modulemap"), read(tmp.path(), "out/vfs.yaml"));

    std::thread::sleep(std::time::Duration::from_millis(20));
    assert!(run_modmap(tmp.path(), &args).status.success());

    assert_eq!((mtime("out/module.modulemap"), mtime("out/vfs.yaml")), before);
    assert_eq!(
        (read(tmp.path(), "out/module.modulemap"), read(tmp.path(), "out/vfs.yaml")),
        contents
    );
}

#[test]
fn identical_trees_produce_identical_outputs() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    // Different creation order, same contents.
    for file in ["src/z.h", "src/m/k.h", "src/a.h"] {
        touch(first.path(), file);
    }
    for file in ["src/a.h", "src/m/k.h", "src/z.h"] {
        touch(second.path(), file);
    }

    let args = ["src", "Gen.h", "-m", "module.modulemap", "-v", "vfs.yaml"];
    assert!(run_modmap(first.path(), &args).status.success());
    assert!(run_modmap(second.path(), &args).status.success());

    assert_eq!(read(first.path(), "module.modulemap"), read(second.path(), "module.modulemap"));
    assert_eq!(read(first.path(), "vfs.yaml"), read(second.path(), "vfs.yaml"));
}

#[test]
fn success_is_silent() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), "src/a.h");

    let output = run_modmap(tmp.path(), &["src", "Gen.h", "-m", "m", "-v", "v"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn nonexistent_directory_fails_without_output() {
    let tmp = tempfile::tempdir().unwrap();

    let output = run_modmap(
        tmp.path(),
        &["missing", "Gen.h", "-m", "out/module.modulemap", "-v", "vfs.yaml"],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr.trim_end(), "Error: missing is not a directory");
    assert!(!tmp.path().join("out").exists());
    assert!(!tmp.path().join("vfs.yaml").exists());
}

#[test]
fn invalid_directory_wins_over_unsaved_recording() {
    let tmp = tempfile::tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_modmap");
    let output = Command::new(bin)
        .current_dir(tmp.path())
        .args(["missing", "Gen.h", "-m", "module.modulemap", "-v", "vfs.yaml"])
        .env("MODMAP_RECORD", tmp.path().join("no/such/dir/run.cassette.yaml"))
        .env_remove("MODMAP_LOG")
        .output()
        .expect("failed to run modmap binary");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr.trim_end(), "Error: missing is not a directory");
}

#[test]
fn file_instead_of_directory_fails_without_output() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), "a.h");

    let output = run_modmap(
        tmp.path(),
        &["a.h", "Gen.h", "-m", "module.modulemap", "-v", "vfs.yaml"],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Error: a.h is not a directory"));
    assert!(!tmp.path().join("module.modulemap").exists());
    assert!(!tmp.path().join("vfs.yaml").exists());
}

#[test]
fn missing_overlay_parent_is_an_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), "src/a.h");

    let output = run_modmap(
        tmp.path(),
        &["src", "Gen.h", "-m", "module.modulemap", "-v", "nowhere/vfs.yaml"],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("nowhere/vfs.yaml"));
    // The module map was written before the overlay failed.
    assert!(tmp.path().join("module.modulemap").exists());
}

#[test]
fn missing_generated_files_shows_usage_error() {
    let tmp = tempfile::tempdir().unwrap();
    let output = run_modmap(tmp.path(), &["src", "-m", "m", "-v", "v"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("GENERATED_FILES"));
}

#[test]
fn help_lists_output_flags() {
    let tmp = tempfile::tempdir().unwrap();
    let output = run_modmap(tmp.path(), &["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--module-map"));
    assert!(stdout.contains("--vfs-map"));
}
