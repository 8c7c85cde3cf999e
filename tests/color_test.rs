use std::io::Cursor;

use artify::{
    color::{self, ArtworkColorExtractor, ColorExtractor, Rgb},
    error::AppError,
};
use image::{ImageFormat, Rgb as Pixel, RgbImage};
use mockito::Server;
use reqwest::Client;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// 64x64 cover, mostly shades of red with a small blue corner.
fn red_cover_png() -> Vec<u8> {
    let image = RgbImage::from_fn(64, 64, |x, y| {
        if x < 8 && y < 8 {
            Pixel([20, 40, 220])
        } else {
            Pixel([180 + ((x + y) % 60) as u8, (y % 20) as u8, (x % 20) as u8])
        }
    });

    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn test_hsv_of_primary_colors() {
    let red = Rgb::new(255, 0, 0).to_hsv();
    assert_close(red.h, 0.0);
    assert_close(red.s, 1.0);
    assert_close(red.v, 255.0);

    let green = Rgb::new(0, 255, 0).to_hsv();
    assert_close(green.h, 1.0 / 3.0);

    let blue = Rgb::new(0, 0, 255).to_hsv();
    assert_close(blue.h, 2.0 / 3.0);

    assert!(red < green && green < blue);
}

#[test]
fn test_hsv_of_greys_and_wraparound() {
    let grey = Rgb::new(90, 90, 90).to_hsv();
    assert_close(grey.h, 0.0);
    assert_close(grey.s, 0.0);
    assert_close(grey.v, 90.0);

    // magenta sits just below a full turn, not at a negative hue
    let magenta = Rgb::new(255, 0, 128).to_hsv();
    assert!(magenta.h > 0.9 && magenta.h < 1.0);

    let orange = Rgb::new(250, 200, 0).to_hsv();
    assert_close(orange.h, 0.8 / 6.0);
    assert_close(orange.s, 1.0);
}

#[test]
fn test_dominant_color_from_bytes_picks_the_large_area() {
    let rgb = color::dominant_color_from_bytes(&red_cover_png()).unwrap();
    assert!(rgb.r > 150, "{rgb:?}");
    assert!(rgb.r > rgb.g && rgb.r > rgb.b, "{rgb:?}");
}

#[test]
fn test_dominant_color_from_bytes_rejects_non_images() {
    let result = color::dominant_color_from_bytes(b"<html>not a cover</html>");
    assert!(matches!(result, Err(AppError::Image(_))));
}

#[tokio::test]
async fn test_artwork_extractor_downloads_cover() {
    let mut server = Server::new_async().await;
    let cover = server
        .mock("GET", "/image/abc")
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(red_cover_png())
        .create_async()
        .await;

    let extractor = ArtworkColorExtractor::new(Client::new());
    let rgb = extractor
        .dominant_color(&format!("{}/image/abc", server.url()))
        .await
        .unwrap();

    cover.assert_async().await;
    assert!(rgb.r > rgb.g && rgb.r > rgb.b, "{rgb:?}");
}

#[tokio::test]
async fn test_artwork_extractor_propagates_http_errors() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/image/gone")
        .with_status(404)
        .create_async()
        .await;

    let extractor = ArtworkColorExtractor::new(Client::new());
    let result = extractor
        .dominant_color(&format!("{}/image/gone", server.url()))
        .await;

    assert!(matches!(result, Err(AppError::Http(_))));
}
