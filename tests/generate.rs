#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use pwa_icons::{
        config::{ACCENT_COLOR, BACKGROUND, FontSource, GeneratorConfig, PWA_SIZES},
        font::{load_font, system_font_candidates},
        generator::generate,
    };
    use std::fs;

    fn builtin_config(out_dir: impl Into<std::path::PathBuf>) -> GeneratorConfig {
        GeneratorConfig::with_out_dir(out_dir).font(FontSource::Builtin)
    }

    fn open_rgb(path: &std::path::Path) -> RgbImage {
        image::open(path).unwrap().into_rgb8()
    }

    fn contains(img: &RgbImage, color: Rgb<u8>) -> bool {
        img.pixels().any(|p| *p == color)
    }

    #[test]
    fn writes_every_size() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("icons");
        let written = generate(&builtin_config(&out_dir)).unwrap();

        assert_eq!(written.len(), PWA_SIZES.len());
        for size in PWA_SIZES {
            let path = out_dir.join(format!("icon-{size}x{size}.png"));
            assert!(written.contains(&path));
            let img = open_rgb(&path);
            assert_eq!(img.dimensions(), (size, size));
            assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        }
    }

    #[test]
    fn output_is_three_channel_png() {
        let dir = tempfile::tempdir().unwrap();
        generate(&builtin_config(dir.path())).unwrap();
        let img = image::open(dir.path().join("icon-72x72.png")).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn subtitle_only_on_large_icons() {
        let dir = tempfile::tempdir().unwrap();
        generate(&builtin_config(dir.path())).unwrap();

        for size in [72, 96, 128] {
            let img = open_rgb(&dir.path().join(format!("icon-{size}x{size}.png")));
            assert!(!contains(&img, ACCENT_COLOR), "size {size}");
        }
        for size in [144, 152, 192, 384, 512] {
            let img = open_rgb(&dir.path().join(format!("icon-{size}x{size}.png")));
            assert!(contains(&img, ACCENT_COLOR), "size {size}");
        }
    }

    #[test]
    fn reruns_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = builtin_config(dir.path());

        let first: Vec<Vec<u8>> = generate(&config)
            .unwrap()
            .iter()
            .map(|path| fs::read(path).unwrap())
            .collect();
        let second: Vec<Vec<u8>> = generate(&config)
            .unwrap()
            .iter()
            .map(|path| fs::read(path).unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn creates_missing_directory_and_tolerates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("nested").join("icons");
        assert!(!out_dir.exists());

        generate(&builtin_config(&out_dir)).unwrap();
        assert!(out_dir.is_dir());
        generate(&builtin_config(&out_dir)).unwrap();
        assert!(out_dir.join("icon-512x512.png").is_file());
    }

    #[test]
    fn missing_font_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::with_out_dir(dir.path())
            .font(FontSource::File(dir.path().join("Helvetica.ttc")));
        let fallback = generate(&config).unwrap();

        let builtin_dir = dir.path().join("builtin");
        let builtin = generate(&builtin_config(&builtin_dir)).unwrap();
        for (a, b) in fallback.iter().zip(&builtin) {
            assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
        }
    }

    #[test]
    fn system_font_run_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::with_out_dir(dir.path());
        for path in generate(&config).unwrap() {
            let img = open_rgb(&path);
            assert_eq!(img.width(), img.height());
            assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        }
    }

    #[test]
    fn outline_font_accent_follows_threshold() {
        let Some(font_path) = system_font_candidates()
            .into_iter()
            .find(|path| load_font(path).is_ok())
        else {
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::with_out_dir(dir.path()).font(FontSource::File(font_path));
        generate(&config).unwrap();

        for size in PWA_SIZES {
            let img = open_rgb(&dir.path().join(format!("icon-{size}x{size}.png")));
            assert_eq!(img.dimensions(), (size, size));
            assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
            assert_eq!(contains(&img, ACCENT_COLOR), size >= 144, "size {size}");
        }
    }

    #[test]
    fn rejects_invalid_sizes_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("icons");

        let mut config = builtin_config(&out_dir);
        config.sizes = vec![72, 0];
        assert!(generate(&config).is_err());

        config.sizes.clear();
        assert!(generate(&config).is_err());
        assert!(!out_dir.exists());
    }

    #[test]
    fn unwritable_output_aborts() {
        let dir = tempfile::tempdir().unwrap();
        // a regular file where the directory should be
        let blocker = dir.path().join("icons");
        fs::write(&blocker, b"").unwrap();
        assert!(generate(&builtin_config(&blocker)).is_err());
    }
}
