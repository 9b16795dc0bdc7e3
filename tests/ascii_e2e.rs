//! End-to-end tests for image-to-ascii conversion.
//!
//! These tests cover the full path from an encoded image to text:
//! - Local PNG files through FileSource and AutoSource
//! - Mock HTTP server downloads through HttpSource
//! - The CLI convert handler writing to an output file

use std::io::Cursor;
use std::time::Duration;

use clap::Parser;
use image_to_ascii::cli::{run_convert, Args, CliError};
use image_to_ascii::{
    image_to_ascii, AsciiError, AutoSource, ConvertOptions, FileSource, HttpSource, LoadError,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Horizontal gradient: left black, right white.
fn gradient_image(width: u32, height: u32) -> image::RgbaImage {
    image::RgbaImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1)) as u8;
        image::Rgba([v, v, v, 255])
    })
}

fn checker_image() -> image::RgbaImage {
    image::RgbaImage::from_fn(2, 2, |x, _| {
        if x == 0 {
            image::Rgba([0, 0, 0, 255])
        } else {
            image::Rgba([255, 255, 255, 255])
        }
    })
}

fn png_bytes(image: image::RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn options(chunk_width: u32, chunk_height: u32) -> ConvertOptions {
    ConvertOptions::new()
        .with_chunk_width(chunk_width)
        .with_chunk_height(chunk_height)
}

// === File Source Tests ===

#[tokio::test]
async fn test_file_checker_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checker.png");
    checker_image().save(&path).unwrap();

    let art = image_to_ascii(&FileSource::new(), path.to_str().unwrap(), &options(2, 2))
        .await
        .unwrap();
    assert_eq!(art, "+\n");
}

#[tokio::test]
async fn test_file_gradient_shape_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.png");
    gradient_image(100, 40).save(&path).unwrap();

    let art = image_to_ascii(&AutoSource::new().unwrap(), path.to_str().unwrap(), &ConvertOptions::new())
        .await
        .unwrap();

    let lines: Vec<&str> = art.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert_eq!(line.len(), 10);
        // Dark on the left, light on the right
        assert_eq!(line.chars().next(), Some('@'));
        assert_ne!(line.chars().last(), Some('@'));
    }
    assert_eq!(lines[0], lines[1]);
}

#[tokio::test]
async fn test_file_reverse_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("black.png");
    image::RgbaImage::from_pixel(6, 6, image::Rgba([0, 0, 0, 255]))
        .save(&path)
        .unwrap();

    let art = image_to_ascii(
        &FileSource::new(),
        path.to_str().unwrap(),
        &options(3, 3).with_reverse(true),
    )
    .await
    .unwrap();
    assert_eq!(art, "  \n  \n");
}

#[tokio::test]
async fn test_missing_file_fails_with_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.png");

    let err = image_to_ascii(&FileSource::new(), missing.to_str().unwrap(), &ConvertOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AsciiError::Load(LoadError::Io { .. })));
}

// === HTTP Source Tests ===

#[tokio::test]
async fn test_http_source_downloads_and_converts() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/checker.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(png_bytes(checker_image())),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/checker.png", mock_server.uri());
    let source = AutoSource::new().unwrap();
    let art = image_to_ascii(&source, &url, &options(1, 1)).await.unwrap();
    assert_eq!(art, "@ \n@ \n");
}

#[tokio::test]
async fn test_http_status_error_is_not_retried() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/missing.png", mock_server.uri());
    let err = image_to_ascii(&HttpSource::new().unwrap(), &url, &ConvertOptions::new())
        .await
        .unwrap_err();
    match err {
        AsciiError::Load(LoadError::Status { url: failed, status }) => {
            assert_eq!(failed, url);
            assert_eq!(status, 404);
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_body_over_limit_is_rejected() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 4096]))
        .mount(&mock_server)
        .await;

    let source = HttpSource::with_limits(Duration::from_secs(5), 1024).unwrap();
    let url = format!("{}/big.png", mock_server.uri());
    let err = image_to_ascii(&source, &url, &ConvertOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AsciiError::Load(LoadError::TooLarge { limit: 1024, .. })
    ));
}

#[tokio::test]
async fn test_http_non_image_body_is_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not an image</html>"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/page.html", mock_server.uri());
    let err = image_to_ascii(&HttpSource::new().unwrap(), &url, &ConvertOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AsciiError::Load(LoadError::Decode(_))));
}

#[tokio::test]
async fn test_http_slow_response_times_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(png_bytes(checker_image()))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let source = HttpSource::with_limits(Duration::from_millis(200), 1024 * 1024).unwrap();
    let url = format!("{}/slow.png", mock_server.uri());
    let err = image_to_ascii(&source, &url, &ConvertOptions::new())
        .await
        .unwrap_err();
    match err {
        AsciiError::Load(LoadError::Http(e)) => assert!(e.is_timeout()),
        other => panic!("Expected timeout, got {:?}", other),
    }
}

// === CLI Tests ===

#[tokio::test]
async fn test_cli_convert_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("checker.png");
    let config_path = dir.path().join("config.toml");
    let output_path = dir.path().join("art.txt");
    checker_image().save(&image_path).unwrap();
    std::fs::write(&config_path, "[render]\nchunk_width = 2\nchunk_height = 2\n").unwrap();

    let args = Args::parse_from([
        "image-to-ascii",
        image_path.to_str().unwrap(),
        "--config",
        config_path.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
    ]);
    run_convert(&args).await.unwrap();

    assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "+\n");
}

#[tokio::test]
async fn test_cli_flags_override_config() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("checker.png");
    let config_path = dir.path().join("config.toml");
    let output_path = dir.path().join("art.txt");
    checker_image().save(&image_path).unwrap();
    std::fs::write(&config_path, "[render]\nchunk_width = 2\nchunk_height = 2\n").unwrap();

    let args = Args::parse_from([
        "image-to-ascii",
        image_path.to_str().unwrap(),
        "-c",
        config_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "-W",
        "1",
        "-H",
        "1",
        "--reverse",
    ]);
    run_convert(&args).await.unwrap();

    assert_eq!(std::fs::read_to_string(&output_path).unwrap(), " @\n @\n");
}

#[tokio::test]
async fn test_cli_missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("checker.png");
    checker_image().save(&image_path).unwrap();

    let args = Args::parse_from([
        "image-to-ascii",
        image_path.to_str().unwrap(),
        "--config",
        dir.path().join("absent.toml").to_str().unwrap(),
    ]);
    let err = run_convert(&args).await.unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}
