//! End-to-end import tests over realistic plotter streams.

use hpgl2svg::{DecodeError, ImportOptions, import, import_svg};

fn options() -> ImportOptions {
    ImportOptions {
        resolution_x: 90.0,
        resolution_y: 90.0,
        doc_width: 210.0,
        doc_height: 297.0,
        show_movements: false,
    }
}

/// A small two-pen drawing the way a vinyl cutter driver would emit it:
/// init, pen select, alternating pen-up moves and pen-down polylines, and
/// a final park move back to the origin.
const TWO_PEN_DRAWING: &str =
    "IN;SP1;PU100,100;PD200,100;PD200,200;PD100,200;PD100,100;PU0,0;SP2;PU50,50;PD80,80;PU0,0;";

#[test]
fn two_pen_drawing_builds_two_layers() {
    let result = import(TWO_PEN_DRAWING, &options()).unwrap();
    let rendered = result.document.to_string();

    assert!(rendered.contains(r#"inkscape:label="Drawing Pen 1""#));
    assert!(rendered.contains(r#"inkscape:label="Drawing Pen 2""#));
    assert!(!rendered.contains("Movements"));

    // Pen 1 holds the closed square as one polyline, flipped against the
    // 297-unit page height.
    assert!(rendered.contains(r#"d="M 100,197 L 200,197 L 200,97 L 100,97 L 100,197""#));
    // Pen 2 holds the diagonal.
    assert!(rendered.contains(r#"d="M 50,247 L 80,217""#));
    assert!(result.warnings.is_empty());
}

#[test]
fn movements_are_traced_in_red_when_enabled() {
    let with_movements = ImportOptions {
        show_movements: true,
        ..options()
    };
    let (rendered, warnings) = import_svg(TWO_PEN_DRAWING, &with_movements).unwrap();

    assert!(rendered.contains(r#"inkscape:label="Movements""#));
    // Travel from the device origin to the first pen-up target.
    assert!(rendered.contains(r#"d="M 0,297 L 100,197""#));
    assert!(rendered.contains("stroke:#ff0000; stroke-width:0.4; fill:none;"));
    assert!(warnings.is_empty());
}

#[test]
fn resolution_rescales_the_whole_drawing() {
    let hires = ImportOptions {
        resolution_x: 1016.0,
        resolution_y: 1016.0,
        ..options()
    };
    // 1016 dpi is the classic HP plotter unit (40 steps/mm); 1016 device
    // units come out as 90 page units.
    let (rendered, _) = import_svg("IN;SP1;PU0,0;PD1016,1016;PU0,0;", &hires).unwrap();
    assert!(rendered.contains(r#"d="M 0,297 L 90,207""#));
}

#[test]
fn garbage_input_fails_with_the_legacy_symbol() {
    let err = import_svg("not hpgl at all", &options()).unwrap_err();
    assert!(matches!(err, DecodeError::NoData));
    assert_eq!(err.symbol(), "NO_HPGL_DATA");
}

#[test]
fn unknown_commands_warn_but_do_not_block_the_import() {
    // LT (line type) and VS (velocity select) are real HP-GL commands this
    // importer does not handle.
    let source = "IN;VS20;SP1;LT2;PU0,0;PD100,100;PU0,0;";
    let result = import(source, &options()).unwrap();
    assert_eq!(result.warnings.len(), 2);
    assert!(
        result
            .warnings
            .iter()
            .all(|w| w.symbol() == "UNKNOWN_COMMANDS")
    );
    assert!(result.document.to_string().contains(r#"d="M 0,297 L 100,197""#));
}
