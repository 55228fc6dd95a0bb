// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End to end flows chaining the three queries.

use paint_script::{IntRect, Picture};
use paint_script::kurbo::Rect;
use text_select::{Region, build_selection, extract_text, find_closest};

use crate::util::{AREA, Page, line_box};

fn select(picture: &Picture, start: IntRect, end: IntRect) -> Region {
    let mut region = Region::new();
    build_selection(picture, AREA, start, end, &mut region);
    region
}

#[test]
fn scenario_hello_world() {
    // `HELLO` ends at 40 and `WORLD` starts at 46: the gap is exactly the threshold.
    let picture = Page::new().text("HELLO", 0, 20).text("WORLD", 46, 20).finish();

    let region = select(&picture, line_box(0, 20), line_box(78, 20));
    assert_eq!(
        region.rects().collect::<Vec<_>>(),
        [IntRect::new(0, 12, 86, 22)]
    );
    assert_eq!(extract_text(&picture, AREA, &region).to_string(), "HELLO WORLD");
}

#[test]
fn scenario_tap_between_two_runs() {
    let picture = Page::new().text("a", 6, 13).text("b", 96, 103).finish();
    let closest = find_closest(&picture, AREA, 12, 11);
    assert_eq!(closest, Some(IntRect::new(6, 5, 14, 15)));
    assert_eq!(closest.map(|rect| (rect.center_x(), rect.center_y())), Some((10, 10)));
}

#[test]
fn scenario_tap_select_and_copy() {
    let picture = Page::new()
        .text("the quick", 0, 20)
        .text("brown fox", 0, 40)
        .text("jumps", 0, 60)
        .finish();

    // Tap inside `q`, then inside the `o` of `brown`.
    let start = find_closest(&picture, AREA, 35, 16);
    let end = find_closest(&picture, AREA, 19, 36);
    assert_eq!(start, Some(line_box(32, 20)));
    assert_eq!(end, Some(line_box(16, 40)));

    let (Some(start), Some(end)) = (start, end) else {
        unreachable!("both taps hit a glyph");
    };
    let region = select(&picture, start, end);
    assert_eq!(extract_text(&picture, AREA, &region).to_string(), "quick bro");
}

#[test]
fn scenario_selection_reads_back_in_drawing_order() {
    // Runs drawn right to left on one line.
    let picture = Page::new()
        .text("third", 100, 20)
        .text("second", 50, 20)
        .text("first", 0, 20)
        .finish();
    let region = select(&picture, line_box(100, 20), line_box(32, 20));
    assert_eq!(
        extract_text(&picture, AREA, &region).to_string(),
        "thirdsecondfirst"
    );
}

#[test]
fn scenario_single_glyph_selection() {
    let picture = Page::new().text("abc", 0, 20).finish();
    let handle = line_box(8, 20);
    let region = select(&picture, handle, handle);
    assert_eq!(extract_text(&picture, AREA, &region).to_string(), "b");
}

#[test]
fn scenario_rebuilding_gives_an_equal_cover() {
    let picture = Page::new()
        .text("lorem ipsum", 0, 20)
        .text("dolor sit", 0, 40)
        .finish();
    let start = line_box(48, 20);
    let end = line_box(56, 40);
    assert_eq!(select(&picture, start, end), select(&picture, start, end));
    assert_eq!(
        extract_text(&picture, AREA, &select(&picture, start, end)).to_string(),
        "ipsum dolor si"
    );
}

#[test]
fn scenario_clipped_text_is_not_selectable() {
    let picture = Page::new()
        .with(|recorder| {
            recorder.save();
            recorder.clip_rect(Rect::new(0.0, 0.0, 20.0, 100.0));
        })
        .text("abcdef", 0, 20)
        .with(|recorder| recorder.restore())
        .finish();

    // `c` straddles the clip edge at 20 and is still visible.
    assert_eq!(find_closest(&picture, AREA, 44, 17), Some(line_box(16, 20)));
    let region = select(&picture, line_box(0, 20), line_box(40, 20));
    assert_eq!(extract_text(&picture, AREA, &region).to_string(), "abc");
}
