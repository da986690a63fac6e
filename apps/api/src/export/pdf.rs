//! Paginated PDF export.
//!
//! One bold title line, then the body laid out line by line, word-wrapped
//! against a static Helvetica width table and flowed onto additional A4
//! pages when the cursor passes the bottom margin. Source line breaks become
//! paragraph breaks; no markup interpretation is applied.
//!
//! Character widths are in em units (relative to font size), covering ASCII
//! 0x20..=0x7E with an average-width fallback for everything else. This is an
//! intentional approximation: wrap points may drift a percent or two from the
//! true glyph advance, which is harmless for plain-text documents.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::ExportError;

// ────────────────────────────────────────────────────────────────────────────
// Page geometry (A4 portrait)
// ────────────────────────────────────────────────────────────────────────────

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 12.0;
const TITLE_SIZE_PT: f32 = 14.0;
const BODY_SIZE_PT: f32 = 11.0;
/// Vertical advance for the title line and the gap beneath it.
const TITLE_LINE_MM: f32 = 8.0;
const TITLE_GAP_MM: f32 = 3.0;
/// Vertical advance per printed body line.
const BODY_LINE_MM: f32 = 6.0;

const MM_PER_PT: f32 = 25.4 / 72.0;

// ────────────────────────────────────────────────────────────────────────────
// Helvetica metrics
// ────────────────────────────────────────────────────────────────────────────

/// Width of each ASCII character 0x20..=0x7E in em units (AFM widths / 1000).
#[rustfmt::skip]
static HELVETICA_WIDTHS: [f32; 95] = [
    // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
    0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
    // 0      1      2      3      4      5      6      7      8      9
    0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
    // :      ;      <      =      >      ?      @
    0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
    // A      B      C      D      E      F      G      H      I      J      K      L      M
    0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
    // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
    0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
    // [      \      ]      ^      _      `
    0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
    // a      b      c      d      e      f      g      h      i      j      k      l      m
    0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
    // n      o      p      q      r      s      t      u      v      w      x      y      z
    0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
    // {      |      }      ~
    0.334, 0.260, 0.334, 0.584,
];

/// Fallback for non-ASCII characters (codepoints above 0x7E).
const AVERAGE_CHAR_WIDTH_EM: f32 = 0.51;
const SPACE_WIDTH_EM: f32 = 0.278;

fn char_width_em(c: char) -> f32 {
    let code = c as usize;
    if (32..=126).contains(&code) {
        HELVETICA_WIDTHS[code - 32]
    } else {
        AVERAGE_CHAR_WIDTH_EM
    }
}

/// Measures the rendered width of a string in em units.
fn measure_em(s: &str) -> f32 {
    s.chars().map(char_width_em).sum()
}

/// Greedy word-wrap of one source line into printed lines of at most
/// `max_width_em`. A word longer than a full line is emitted on its own line
/// rather than broken mid-word. A blank source line yields one empty printed
/// line, preserving the paragraph break.
fn wrap_line(line: &str, max_width_em: f32) -> Vec<String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return vec![String::new()];
    }

    let mut wrapped = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in words {
        let word_width = measure_em(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + SPACE_WIDTH_EM + word_width > max_width_em {
            wrapped.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += SPACE_WIDTH_EM + word_width;
        }
    }
    wrapped.push(current);
    wrapped
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Renders the title and body into a multi-page PDF byte stream.
pub fn to_pdf_bytes(title: &str, body: &str) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "text layer",
    );

    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    // Usable line width expressed in body-font em units
    let max_width_em = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / (BODY_SIZE_PT * MM_PER_PT);

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM - TITLE_LINE_MM;

    layer.use_text(title, TITLE_SIZE_PT, Mm(MARGIN_MM), Mm(cursor_mm), &bold);
    cursor_mm -= TITLE_GAP_MM;

    for source_line in body.lines() {
        for printed_line in wrap_line(source_line, max_width_em) {
            cursor_mm -= BODY_LINE_MM;
            if cursor_mm < MARGIN_MM {
                let (page, layer_index) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "text layer");
                layer = doc.get_page(page).get_layer(layer_index);
                cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM - BODY_LINE_MM;
            }
            if !printed_line.is_empty() {
                layer.use_text(
                    printed_line,
                    BODY_SIZE_PT,
                    Mm(MARGIN_MM),
                    Mm(cursor_mm),
                    &regular,
                );
            }
        }
    }

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
