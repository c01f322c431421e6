// CLIバイナリのエントリーポイントテスト
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn get_binary_path() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    if path.ends_with("deps") {
        path.pop(); // remove deps directory
    }
    path.join("lgtm_stamp")
}

fn write_png(dir: &std::path::Path, name: &str) {
    let img = image::RgbImage::new(64, 48);
    img.save(dir.join(name)).unwrap();
}

#[test]
fn test_cli_help() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("lgtm_stamp"));
    assert!(stdout.contains("--directory"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--force"));
}

#[test]
fn test_cli_version() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI version test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("lgtm_stamp"));
}

#[test]
fn test_cli_missing_required_flags_exits_with_code_1() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(1));

    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(&binary_path)
        .args(["-d", temp_dir.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_nonexistent_input_directory_exits_with_code_1() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI test - binary not found");
        return;
    }

    let output_dir = TempDir::new().unwrap();
    let output = Command::new(&binary_path)
        .args([
            "-d",
            "/definitely/not/a/directory",
            "-o",
            output_dir.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Input directory does not exist"));

    // 致命的エラーでは何も書かれない
    assert_eq!(fs::read_dir(output_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_stamp_integration() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI stamp integration test - binary not found");
        return;
    }

    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    write_png(input_dir.path(), "good.png");
    fs::write(input_dir.path().join("bad.txt"), b"not an image").unwrap();

    let output = Command::new(&binary_path)
        .args([
            "-d",
            input_dir.path().to_str().unwrap(),
            "-o",
            output_dir.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute binary");

    // 個別失敗があっても終了コードは0
    assert_eq!(output.status.code(), Some(0));

    // 成功行はstdout、失敗行はstderr
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stdout.contains("[success]"));
    assert!(stdout.contains("good.png"));
    assert!(stderr.contains("bad.txt"));

    // 設定バナーはstderr行きで、結果行はstdoutに混ざらない
    assert!(stderr.contains("対象ディレクトリ"));
    assert!(!stdout.contains("対象ディレクトリ"));

    assert!(output_dir.path().join("good.png").exists());
    assert!(!output_dir.path().join("bad.txt").exists());
}

#[test]
fn test_cli_skip_lines_without_force() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI test - binary not found");
        return;
    }

    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    write_png(input_dir.path(), "photo.png");
    fs::write(output_dir.path().join("photo.png"), b"sentinel").unwrap();

    let output = Command::new(&binary_path)
        .args([
            "-d",
            input_dir.path().to_str().unwrap(),
            "-o",
            output_dir.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("[already exists]"));
    assert!(stderr.contains("photo.png"));

    // 既存ファイルはそのまま
    assert_eq!(
        fs::read(output_dir.path().join("photo.png")).unwrap(),
        b"sentinel"
    );
}

#[test]
fn test_cli_force_overwrites_existing_output() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI test - binary not found");
        return;
    }

    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    write_png(input_dir.path(), "photo.png");
    fs::write(output_dir.path().join("photo.png"), b"sentinel").unwrap();

    let output = Command::new(&binary_path)
        .args([
            "-d",
            input_dir.path().to_str().unwrap(),
            "-o",
            output_dir.path().to_str().unwrap(),
            "--force",
        ])
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[success]"));

    assert_ne!(
        fs::read(output_dir.path().join("photo.png")).unwrap(),
        b"sentinel"
    );
}
