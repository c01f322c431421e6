// エンドツーエンド統合テスト
use image::RgbImage;
use lgtm_stamp::{
    compositor::CenteredCompositor, image_loader::standard::StandardImageLoader,
    image_writer::StandardImageWriter, mask_loader::EmbeddedMaskLoader,
    services::{DefaultStampConfig, MemoryOutcomeReporter},
    storage::local::LocalStorageBackend, StampEngine, StampJob,
};
use std::fs;
use tempfile::TempDir;

fn write_gradient_png(dir: &std::path::Path, name: &str, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save(dir.join(name)).unwrap();
}

fn create_engine() -> (
    StampEngine<
        StandardImageLoader,
        EmbeddedMaskLoader,
        CenteredCompositor,
        StandardImageWriter,
        LocalStorageBackend,
        DefaultStampConfig,
        MemoryOutcomeReporter,
    >,
    MemoryOutcomeReporter,
) {
    let reporter = MemoryOutcomeReporter::new();
    let engine = StampEngine::new(
        StandardImageLoader::new(),
        EmbeddedMaskLoader::new(),
        CenteredCompositor::new(),
        StandardImageWriter::new(),
        LocalStorageBackend::new(),
        DefaultStampConfig::default().with_max_concurrent(4),
        reporter.clone(),
    );
    (engine, reporter)
}

#[tokio::test]
async fn test_mixed_batch_scenario() {
    // a.png: 有効な画像、出力なし → 成功
    // b.png: 有効な画像、出力が既存、forceなし → スキップ
    // c.txt: 画像でない → 失敗
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    write_gradient_png(input_dir.path(), "a.png", 320, 240);
    write_gradient_png(input_dir.path(), "b.png", 320, 240);
    fs::write(input_dir.path().join("c.txt"), b"not an image at all").unwrap();

    fs::write(output_dir.path().join("b.png"), b"preexisting output").unwrap();

    let (engine, reporter) = create_engine();
    let job = StampJob::new(input_dir.path(), output_dir.path(), false);
    let summary = engine.process_directory(&job).await.unwrap();

    assert_eq!(summary.total_files, 3);
    assert_eq!(summary.stamped_files, 1);
    assert_eq!(summary.skipped_files, 1);
    assert_eq!(summary.error_count, 1);

    // a.png: 出力が書かれ、成功として報告される
    assert!(output_dir.path().join("a.png").exists());
    assert!(reporter.stamped_paths()[0].ends_with("a.png"));

    // b.png: 既存ファイルはそのまま、スキップとして報告される
    assert_eq!(
        fs::read(output_dir.path().join("b.png")).unwrap(),
        b"preexisting output"
    );
    assert!(reporter.skipped_paths()[0].ends_with("b.png"));

    // c.txt: 出力なし、失敗として報告される
    assert!(!output_dir.path().join("c.txt").exists());
    let failures = reporter.failures();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].0.ends_with("c.txt"));
    assert!(!failures[0].1.is_empty());
}

#[tokio::test]
async fn test_force_rerun_is_idempotent() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    write_gradient_png(input_dir.path(), "photo1.png", 400, 300);
    write_gradient_png(input_dir.path(), "photo2.png", 200, 150);

    let (engine, _reporter) = create_engine();
    let job = StampJob::new(input_dir.path(), output_dir.path(), true);

    let first = engine.process_directory(&job).await.unwrap();
    assert_eq!(first.stamped_files, 2);

    let first_bytes1 = fs::read(output_dir.path().join("photo1.png")).unwrap();
    let first_bytes2 = fs::read(output_dir.path().join("photo2.png")).unwrap();

    let second = engine.process_directory(&job).await.unwrap();
    assert_eq!(second.stamped_files, 2);
    assert_eq!(second.skipped_files, 0);

    // 同じ入力と同じマスクなら2回目もバイト単位で同一
    assert_eq!(
        fs::read(output_dir.path().join("photo1.png")).unwrap(),
        first_bytes1
    );
    assert_eq!(
        fs::read(output_dir.path().join("photo2.png")).unwrap(),
        first_bytes2
    );
}

#[tokio::test]
async fn test_rerun_without_force_skips_everything() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    for i in 0..4 {
        write_gradient_png(input_dir.path(), &format!("img{i}.png"), 64, 64);
    }

    let (engine, reporter) = create_engine();
    let job = StampJob::new(input_dir.path(), output_dir.path(), false);

    let first = engine.process_directory(&job).await.unwrap();
    assert_eq!(first.stamped_files, 4);

    let mut first_run_bytes = Vec::new();
    for i in 0..4 {
        first_run_bytes.push(fs::read(output_dir.path().join(format!("img{i}.png"))).unwrap());
    }

    reporter.clear();
    let second = engine.process_directory(&job).await.unwrap();

    // 2回目は全てスキップされ、ファイルは一切書き換えられない
    assert_eq!(second.stamped_files, 0);
    assert_eq!(second.skipped_files, 4);
    assert_eq!(second.error_count, 0);
    assert_eq!(reporter.skipped_paths().len(), 4);

    for (i, bytes) in first_run_bytes.iter().enumerate() {
        assert_eq!(
            &fs::read(output_dir.path().join(format!("img{i}.png"))).unwrap(),
            bytes
        );
    }
}

#[tokio::test]
async fn test_directories_are_never_dispatched() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    write_gradient_png(input_dir.path(), "top.png", 64, 64);
    let nested = input_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    write_gradient_png(&nested, "inner.png", 64, 64);

    let (engine, _reporter) = create_engine();
    let job = StampJob::new(input_dir.path(), output_dir.path(), false);
    let summary = engine.process_directory(&job).await.unwrap();

    // 直下の通常ファイルだけが対象。サブディレクトリには入らない
    assert_eq!(summary.total_files, 1);
    assert_eq!(summary.stamped_files, 1);
    assert!(output_dir.path().join("top.png").exists());
    assert!(!output_dir.path().join("inner.png").exists());
    assert!(!output_dir.path().join("nested").exists());
}

#[tokio::test]
async fn test_corrupt_file_does_not_affect_siblings() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    for i in 0..5 {
        write_gradient_png(input_dir.path(), &format!("ok{i}.png"), 48, 48);
    }
    fs::write(input_dir.path().join("broken.png"), b"INVALID_PNG_DATA").unwrap();

    let (engine, reporter) = create_engine();
    let job = StampJob::new(input_dir.path(), output_dir.path(), false);
    let summary = engine.process_directory(&job).await.unwrap();

    assert_eq!(summary.total_files, 6);
    assert_eq!(summary.stamped_files, 5);
    assert_eq!(summary.error_count, 1);

    let failures = reporter.failures();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].0.ends_with("broken.png"));

    for i in 0..5 {
        assert!(output_dir.path().join(format!("ok{i}.png")).exists());
    }
    assert!(!output_dir.path().join("broken.png").exists());
}

#[tokio::test]
async fn test_jpeg_input_produces_jpeg_output() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let img = RgbImage::from_pixel(320, 240, image::Rgb([200, 180, 160]));
    img.save(input_dir.path().join("photo.jpg")).unwrap();

    let (engine, _reporter) = create_engine();
    let job = StampJob::new(input_dir.path(), output_dir.path(), false);
    let summary = engine.process_directory(&job).await.unwrap();

    assert_eq!(summary.stamped_files, 1);

    // 出力がJPEGとしてデコードできること（RGBAのままだと保存できない）
    let output_path = output_dir.path().join("photo.jpg");
    let reloaded = image::open(&output_path).unwrap();
    assert_eq!(reloaded.width(), 320);
    assert_eq!(reloaded.height(), 240);
}

#[tokio::test]
async fn test_stamped_output_keeps_source_dimensions() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    // マスク(256x104)より小さい画像でも寸法は変わらない
    write_gradient_png(input_dir.path(), "small.png", 100, 60);
    write_gradient_png(input_dir.path(), "large.png", 800, 600);

    let (engine, _reporter) = create_engine();
    let job = StampJob::new(input_dir.path(), output_dir.path(), false);
    engine.process_directory(&job).await.unwrap();

    let small = image::open(output_dir.path().join("small.png")).unwrap();
    assert_eq!((small.width(), small.height()), (100, 60));

    let large = image::open(output_dir.path().join("large.png")).unwrap();
    assert_eq!((large.width(), large.height()), (800, 600));
}
