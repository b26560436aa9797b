//! End-to-end stamping through files on disk.

use image::{Rgba, RgbaImage};
use tempfile::tempdir;

use bot_avatar::assets::{load_rgba, write_png};
use bot_avatar::stamp::on_ring;
use bot_avatar::{colorize, AssetStore, BadgeColour, BadgeSource, Colour, Stamper, Variant};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// 600x400 badge: a solid inner block, transparent everywhere else.
fn badge_mask() -> RgbaImage {
    RgbaImage::from_fn(600, 400, |x, y| {
        if (60..540).contains(&x) && (60..340).contains(&y) {
            Rgba([229, 57, 53, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

#[test]
fn bot_black_badge_on_white_1024() {
    let dir = tempdir().unwrap();
    let store = AssetStore::new(dir.path().join("assets"));
    store
        .save_badge("black", &colorize(&badge_mask(), Colour::BLACK))
        .unwrap();

    let avatar_path = dir.path().join("avatar.png");
    write_png(&RgbaImage::from_pixel(1024, 1024, WHITE), &avatar_path).unwrap();
    let avatar = load_rgba(&avatar_path).unwrap();

    let outcome = Stamper::new(store)
        .stamp(&avatar, 1024, Variant::Bot, BadgeColour::Black)
        .unwrap();
    let img = &outcome.image;

    assert_eq!(img.dimensions(), (1024, 1024));
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.ring_stroke, Some(60));

    // On the ring at the left edge, vertical middle.
    assert_eq!(img.get_pixel(0, 512).0, [229, 57, 53, 255]);

    // Badge: width 614, height 409, 80px in from the bottom-right corner.
    let (placement, source) = outcome.badge.unwrap();
    assert_eq!(source, BadgeSource::Asset);
    assert_eq!((placement.width, placement.height), (614, 409));
    assert_eq!((placement.x, placement.y), (1024 - 614 - 80, 1024 - 409 - 80));

    // Centre of the badge block is solid black.
    let (cx, cy) = (
        (placement.x + placement.width as i64 / 2) as u32,
        (placement.y + placement.height as i64 / 2) as u32,
    );
    assert_eq!(img.get_pixel(cx, cy).0, [0, 0, 0, 255]);

    // Outside the ring and the badge rectangle nothing changed.
    let in_badge = |x: u32, y: u32| {
        let (x, y) = (x as i64, y as i64);
        x >= placement.x
            && y >= placement.y
            && x < placement.x + placement.width as i64
            && y < placement.y + placement.height as i64
    };
    for (x, y, p) in img.enumerate_pixels() {
        if !on_ring(1024, 60, x, y) && !in_badge(x, y) {
            assert_eq!(*p, WHITE, "pixel ({}, {}) changed", x, y);
        }
    }
}

#[test]
fn derived_badge_matches_red_silhouette() {
    let dir = tempdir().unwrap();
    let store = AssetStore::new(dir.path());
    store.save_badge("red", &badge_mask()).unwrap();

    let stamper = Stamper::new(store);
    let red = stamper.resolve_badge(BadgeColour::Red, 512).unwrap().unwrap();
    let white = stamper.resolve_badge(BadgeColour::White, 512).unwrap().unwrap();

    assert_eq!(red.source, BadgeSource::Asset);
    assert_eq!(white.source, BadgeSource::Template);
    for (r, w) in red.image.pixels().zip(white.image.pixels()) {
        assert_eq!(r.0[3], w.0[3]);
        if w.0[3] > 0 {
            assert_eq!(&w.0[..3], &[255, 255, 255]);
        }
    }
}

#[test]
fn derived_white_badge_has_no_dark_fringe() {
    let dir = tempdir().unwrap();
    let store = AssetStore::new(dir.path());
    store.save_badge("red", &badge_mask()).unwrap();

    let outcome = Stamper::new(store)
        .stamp(
            &RgbaImage::from_pixel(1024, 1024, WHITE),
            1024,
            Variant::Bot,
            BadgeColour::White,
        )
        .unwrap();

    let (placement, source) = outcome.badge.unwrap();
    assert_eq!(source, BadgeSource::Template);

    let mut darkened = 0;
    for y in placement.y..placement.y + placement.height as i64 {
        for x in placement.x..placement.x + placement.width as i64 {
            let (x, y) = (x as u32, y as u32);
            if on_ring(1024, 60, x, y) {
                continue;
            }
            if *outcome.image.get_pixel(x, y) != WHITE {
                darkened += 1;
            }
        }
    }
    assert_eq!(darkened, 0);
}

#[test]
fn premium_stamp_has_no_ring() {
    let dir = tempdir().unwrap();
    let store = AssetStore::new(dir.path());
    write_png(
        &RgbaImage::from_pixel(100, 100, Rgba([255, 215, 0, 255])),
        &store.premium_path(),
    )
    .unwrap();

    let outcome = Stamper::new(store)
        .stamp(
            &RgbaImage::from_pixel(512, 512, WHITE),
            512,
            Variant::Premium,
            BadgeColour::Red,
        )
        .unwrap();

    let stroke = 30; // what a bot ring would use at 512px
    let ring_coloured = outcome
        .image
        .enumerate_pixels()
        .filter(|(x, y, _)| on_ring(512, stroke, *x, *y))
        .any(|(_, _, p)| p.0[..3] == [229, 57, 53]);
    assert!(!ring_coloured);
    assert!(outcome.badge.is_some());
}
