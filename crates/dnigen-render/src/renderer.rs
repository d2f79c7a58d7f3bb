// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Card face renderer.
//
// Lays an identity record out onto the fixed front/back layouts and returns
// the raster as a value. No filesystem access and no shared drawing context:
// given the same record, font set and RNG state, the output buffers are
// pixel-identical.

use ab_glyph::{FontArc, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use rand::Rng;
use tracing::debug;

use dnigen_core::types::IdentityRecord;

use crate::barcode;
use crate::font;
use crate::layout::{self, Region};

/// Renderer for both card faces. Resolves its font once at construction and
/// is reused across the whole batch.
pub struct CardRenderer {
    font: FontArc,
}

impl CardRenderer {
    pub fn new() -> Self {
        Self {
            font: font::resolve(),
        }
    }

    /// Render the front face: header/footer bands, photo placeholder, the
    /// highlighted document number and the personal-data column.
    pub fn render_front(&self, record: &IdentityRecord) -> RgbImage {
        let mut canvas = RgbImage::from_pixel(
            layout::CARD_WIDTH,
            layout::CARD_HEIGHT,
            layout::FRONT_BACKGROUND,
        );

        // Header band with two centered captions.
        fill_region(&mut canvas, &layout::FRONT_HEADER, layout::ACCENT_NAVY);
        self.draw_text_top_centered(
            &mut canvas,
            layout::WHITE,
            layout::FRONT_HEADER.center_x(),
            layout::FRONT_HEADER_TITLE_Y,
            layout::FRONT_TITLE_SCALE,
            layout::FRONT_HEADER_TITLE,
        );
        self.draw_text_top_centered(
            &mut canvas,
            layout::WHITE,
            layout::FRONT_HEADER.center_x(),
            layout::FRONT_HEADER_SUBTITLE_Y,
            layout::FRONT_CAPTION_SCALE,
            layout::FRONT_HEADER_SUBTITLE,
        );

        // Photo placeholder — no actual photo compositing.
        fill_region(&mut canvas, &layout::FRONT_PHOTO, layout::PHOTO_FILL);
        outline_region(
            &mut canvas,
            &layout::FRONT_PHOTO,
            layout::CAPTION_GRAY,
            layout::FRONT_PHOTO_OUTLINE_THICKNESS,
        );
        self.draw_text_centered(
            &mut canvas,
            layout::CAPTION_GRAY,
            layout::FRONT_PHOTO.center_x(),
            layout::FRONT_PHOTO.center_y(),
            layout::FRONT_TITLE_SCALE,
            layout::FRONT_PHOTO_CAPTION,
        );

        // Highlighted document-number box.
        let number_box = layout::FRONT_NUMBER_BOX;
        fill_region(&mut canvas, &number_box, layout::NUMBER_HIGHLIGHT);
        outline_region(&mut canvas, &number_box, layout::ACCENT_NAVY, 1);
        let (caption_dx, caption_dy) = layout::FRONT_NUMBER_CAPTION_OFFSET;
        self.draw_text(
            &mut canvas,
            layout::ACCENT_NAVY,
            number_box.x + caption_dx,
            number_box.y + caption_dy,
            layout::FRONT_CAPTION_SCALE,
            layout::FRONT_NUMBER_CAPTION,
        );
        let (value_dx, value_dy) = layout::FRONT_NUMBER_VALUE_OFFSET;
        self.draw_text(
            &mut canvas,
            layout::ACCENT_NAVY,
            number_box.x + value_dx,
            number_box.y + value_dy,
            layout::NUMBER_SCALE,
            &record.document_number,
        );

        // Stacked label/value pairs.
        let birth_date = record.formatted_birth_date();
        let values = [
            record.paternal_surname.as_str(),
            record.maternal_surname.as_str(),
            record.given_names.as_str(),
            birth_date.as_str(),
            record.sex.letter(),
        ];
        for (i, (caption, value)) in layout::FRONT_FIELD_CAPTIONS.iter().zip(values).enumerate() {
            let y = layout::FRONT_FIELD_START_Y + i as i32 * layout::FRONT_FIELD_STRIDE;
            self.draw_field_pair(
                &mut canvas,
                layout::FRONT_FIELD_X,
                y,
                caption,
                value,
                layout::FRONT_CAPTION_SCALE,
                layout::FRONT_VALUE_SCALE,
            );
        }

        // Footer band.
        fill_region(&mut canvas, &layout::FRONT_FOOTER, layout::ACCENT_NAVY);
        self.draw_text_centered(
            &mut canvas,
            layout::WHITE,
            layout::FRONT_FOOTER.center_x(),
            layout::FRONT_FOOTER.center_y(),
            layout::FRONT_CAPTION_SCALE,
            layout::FRONT_FOOTER_CAPTION,
        );

        debug!(document_number = %record.document_number, "front face rendered");
        canvas
    }

    /// Render the back face: address data column, pseudo-barcode band and
    /// the header/footer captions.
    pub fn render_back(&self, record: &IdentityRecord, rng: &mut impl Rng) -> RgbImage {
        let mut canvas = RgbImage::from_pixel(
            layout::CARD_WIDTH,
            layout::CARD_HEIGHT,
            layout::BACK_BACKGROUND,
        );

        fill_region(&mut canvas, &layout::BACK_HEADER, layout::ACCENT_NAVY);
        self.draw_text_centered(
            &mut canvas,
            layout::WHITE,
            layout::BACK_HEADER.center_x(),
            layout::BACK_HEADER.center_y(),
            layout::BACK_TITLE_SCALE,
            layout::BACK_HEADER_CAPTION,
        );

        let values = [
            record.ubigeo.as_str(),
            record.department.as_str(),
            record.province.as_str(),
            record.district.as_str(),
            record.address.as_str(),
        ];
        for (i, (caption, value)) in layout::BACK_FIELD_CAPTIONS.iter().zip(values).enumerate() {
            let y = layout::BACK_FIELD_START_Y + i as i32 * layout::BACK_FIELD_STRIDE;
            self.draw_field_pair(
                &mut canvas,
                layout::BACK_MARGIN,
                y,
                caption,
                value,
                layout::BACK_CAPTION_SCALE,
                layout::BACK_VALUE_SCALE,
            );
        }

        self.draw_barcode_band(&mut canvas, rng);

        fill_region(&mut canvas, &layout::BACK_FOOTER, layout::ACCENT_NAVY);
        self.draw_text_centered(
            &mut canvas,
            layout::WHITE,
            layout::BACK_FOOTER.center_x(),
            layout::BACK_FOOTER.center_y(),
            layout::BACK_TITLE_SCALE,
            layout::BACK_FOOTER_CAPTION,
        );

        debug!(document_number = %record.document_number, "back face rendered");
        canvas
    }

    // -- Drawing helpers ------------------------------------------------------

    fn draw_barcode_band(&self, canvas: &mut RgbImage, rng: &mut impl Rng) {
        let band = layout::BARCODE_BAND;
        fill_region(canvas, &band, layout::WHITE);
        outline_region(canvas, &band, layout::BLACK, 1);

        let bar_height = band.height - 2 * barcode::BAR_INSET_Y as u32;
        for bar in barcode::synthesize(&band, rng) {
            let rect =
                Rect::at(bar.x, band.y + barcode::BAR_INSET_Y).of_size(bar.width, bar_height);
            draw_filled_rect_mut(canvas, rect, layout::BLACK);
        }
    }

    /// Caption in gray with its value in black directly underneath.
    fn draw_field_pair(
        &self,
        canvas: &mut RgbImage,
        x: i32,
        y: i32,
        caption: &str,
        value: &str,
        caption_scale: f32,
        value_scale: f32,
    ) {
        self.draw_text(canvas, layout::CAPTION_GRAY, x, y, caption_scale, caption);
        self.draw_text(
            canvas,
            layout::BLACK,
            x,
            y + layout::VALUE_OFFSET_Y,
            value_scale,
            value,
        );
    }

    fn draw_text(
        &self,
        canvas: &mut RgbImage,
        color: Rgb<u8>,
        x: i32,
        y: i32,
        scale: f32,
        text: &str,
    ) {
        draw_text_mut(canvas, color, x, y, PxScale::from(scale), &self.font, text);
    }

    /// Horizontally centered on `center_x`, top edge at `y`.
    fn draw_text_top_centered(
        &self,
        canvas: &mut RgbImage,
        color: Rgb<u8>,
        center_x: i32,
        y: i32,
        scale: f32,
        text: &str,
    ) {
        let (width, _) = text_size(PxScale::from(scale), &self.font, text);
        self.draw_text(canvas, color, center_x - (width / 2) as i32, y, scale, text);
    }

    /// Centered on both axes.
    fn draw_text_centered(
        &self,
        canvas: &mut RgbImage,
        color: Rgb<u8>,
        center_x: i32,
        center_y: i32,
        scale: f32,
        text: &str,
    ) {
        let (width, height) = text_size(PxScale::from(scale), &self.font, text);
        self.draw_text(
            canvas,
            color,
            center_x - (width / 2) as i32,
            center_y - (height / 2) as i32,
            scale,
            text,
        );
    }
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn fill_region(canvas: &mut RgbImage, region: &Region, color: Rgb<u8>) {
    draw_filled_rect_mut(canvas, region.to_rect(), color);
}

fn outline_region(canvas: &mut RgbImage, region: &Region, color: Rgb<u8>, thickness: u32) {
    for inset in 0..thickness {
        let rect = Rect::at(region.x + inset as i32, region.y + inset as i32)
            .of_size(region.width - 2 * inset, region.height - 2 * inset);
        draw_hollow_rect_mut(canvas, rect, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dnigen_core::types::Sex;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_record() -> IdentityRecord {
        IdentityRecord {
            document_number: "45678901".into(),
            given_names: "MARIA ELENA".into(),
            paternal_surname: "GARCIA".into(),
            maternal_surname: "TORRES".into(),
            sex: Sex::Female,
            birth_date: NaiveDate::from_ymd_opt(1988, 7, 14).unwrap(),
            department: "CUSCO".into(),
            province: "CUSCO".into(),
            district: "WANCHAQ".into(),
            address: "AV. LARCO 742".into(),
            ubigeo: "120304".into(),
        }
    }

    #[test]
    fn faces_have_card_dimensions() {
        let renderer = CardRenderer::new();
        let record = sample_record();
        let mut rng = StdRng::seed_from_u64(1);

        let front = renderer.render_front(&record);
        let back = renderer.render_back(&record, &mut rng);
        for face in [&front, &back] {
            assert_eq!(face.width(), layout::CARD_WIDTH);
            assert_eq!(face.height(), layout::CARD_HEIGHT);
        }
    }

    #[test]
    fn front_rendering_is_deterministic() {
        let renderer = CardRenderer::new();
        let record = sample_record();
        let first = renderer.render_front(&record);
        let second = renderer.render_front(&record);
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn back_rendering_is_deterministic_under_a_fixed_seed() {
        let renderer = CardRenderer::new();
        let record = sample_record();
        let first = renderer.render_back(&record, &mut StdRng::seed_from_u64(9));
        let second = renderer.render_back(&record, &mut StdRng::seed_from_u64(9));
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn front_bands_and_regions_are_painted() {
        let renderer = CardRenderer::new();
        let front = renderer.render_front(&sample_record());

        // Header and footer bands in the accent color, away from caption glyphs.
        assert_eq!(*front.get_pixel(10, 10), layout::ACCENT_NAVY);
        assert_eq!(*front.get_pixel(10, 520), layout::ACCENT_NAVY);
        // Background between header and data regions.
        assert_eq!(*front.get_pixel(5, 90), layout::FRONT_BACKGROUND);
        // Photo placeholder fill, inside the 2-unit outline.
        assert_eq!(*front.get_pixel(45, 105), layout::PHOTO_FILL);
        // Document-number highlight, clear of the caption and digits.
        assert_eq!(*front.get_pixel(255, 145), layout::NUMBER_HIGHLIGHT);
    }

    #[test]
    fn front_header_caption_leaves_white_glyphs() {
        let renderer = CardRenderer::new();
        let front = renderer.render_front(&sample_record());
        let header = layout::FRONT_HEADER;
        let white = (0..header.bottom())
            .flat_map(|y| (0..header.right()).map(move |x| (x, y)))
            .any(|(x, y)| *front.get_pixel(x as u32, y as u32) == layout::WHITE);
        assert!(white, "header caption left no white pixels");
    }

    #[test]
    fn back_barcode_band_is_outlined_and_bounded() {
        let renderer = CardRenderer::new();
        let record = sample_record();
        let back = renderer.render_back(&record, &mut StdRng::seed_from_u64(21));

        let band = layout::BARCODE_BAND;
        // Outline corner.
        assert_eq!(
            *back.get_pixel(band.x as u32, band.y as u32),
            layout::BLACK
        );
        // The inner margins stay clear of bars: only the outline column may
        // be black at the band's far right.
        for y in (band.y + barcode::BAR_INSET_Y)..(band.bottom() - barcode::BAR_INSET_Y) {
            for x in (band.right() - 9)..(band.right() - 1) {
                assert_ne!(
                    *back.get_pixel(x as u32, y as u32),
                    layout::BLACK,
                    "bar leaked into the right margin at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn back_bands_are_painted() {
        let renderer = CardRenderer::new();
        let back = renderer.render_back(&sample_record(), &mut StdRng::seed_from_u64(2));
        assert_eq!(*back.get_pixel(10, 10), layout::ACCENT_NAVY);
        assert_eq!(*back.get_pixel(10, 520), layout::ACCENT_NAVY);
        assert_eq!(*back.get_pixel(10, 60), layout::BACK_BACKGROUND);
    }
}
