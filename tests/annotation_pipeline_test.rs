// Test the full annotation pass against an in-memory host buffer

use verse_overlay::{
    compute_rate_dim, Annotation, DocumentView, Hsl, LineView, OverlayEngine, RhymeExtractor,
    ScreenPoint, Span, StyleDirective, SyllableEstimator,
};

/// In-memory host document with everything visible
struct TestBuffer {
    text: String,
}

impl TestBuffer {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    fn lines(&self) -> Vec<LineView> {
        let mut lines = Vec::new();
        let mut from = 0;
        for text in self.text.split('\n') {
            let line = LineView::new(from, text);
            from = line.to + 1;
            lines.push(line);
        }
        lines
    }
}

impl DocumentView for TestBuffer {
    fn visible_ranges(&self) -> Vec<Span> {
        vec![Span::new(0, self.text.len())]
    }

    fn line_at(&self, offset: usize) -> Option<LineView> {
        self.lines()
            .into_iter()
            .find(|line| line.from <= offset && offset <= line.to)
    }

    fn coords_at(&self, offset: usize) -> Option<ScreenPoint> {
        if offset > self.text.len() {
            return None;
        }
        let row = self.text[..offset].matches('\n').count();
        let line = self.line_at(offset)?;
        Some(ScreenPoint::new(
            (offset - line.from) as f32 * 8.0,
            row as f32 * 16.0 + 40.0,
        ))
    }
}

/// Counts vowel runs, the roughest workable syllable estimate
struct VowelRuns;

impl SyllableEstimator for VowelRuns {
    fn syllables(&self, text: &str) -> usize {
        let mut count = 0;
        let mut in_run = false;
        for ch in text.chars() {
            let vowel = matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
            if vowel && !in_run {
                count += 1;
            }
            in_run = vowel;
        }
        count
    }
}

/// Rhymes on the last word's suffix from its final vowel
struct TailRhymer;

impl RhymeExtractor for TailRhymer {
    fn rhyming_part(&self, text: &str) -> Option<String> {
        let word = text.split_whitespace().last()?.to_ascii_lowercase();
        let at = word.rfind(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))?;
        Some(word[at..].to_string())
    }
}

fn engine() -> OverlayEngine<VowelRuns, TailRhymer> {
    OverlayEngine::new(VowelRuns, TailRhymer)
}

#[test]
fn test_example_line_end_to_end() {
    let buffer = TestBuffer::new("/* 3 */ {Osc.ar * 2}");
    let overlay = engine().compute_overlay(&buffer);

    // "{Osc.ar * 2" normalizes to Mosk / times / two: four vowel runs
    assert_eq!(
        overlay.annotations,
        vec![
            Annotation::new(
                Span::new(0, 7),
                StyleDirective::Background {
                    color: Hsl::new(220, 100, 30),
                },
            ),
            Annotation::new(Span::new(7, 9), StyleDirective::Opacity { value: 0.5 }),
            Annotation::new(
                Span::new(18, 19),
                StyleDirective::Background {
                    color: Hsl::new(0, 50, 30),
                },
            ),
        ]
    );
}

#[test]
fn test_unmarked_lines_are_ignored() {
    let buffer = TestBuffer::new("Osc.ar * 2\n// just a comment");
    let overlay = engine().compute_overlay(&buffer);
    assert!(overlay.is_empty());
}

#[test]
fn test_rhyme_groups_share_colors_in_first_seen_order() {
    // trailing words rhyme as A, B, A, C under the tail rhymer
    let buffer = TestBuffer::new(
        "/* 1 */ {Saw}\n/* 2 */ {Pulse}\n/* 3 */ {Raw}\n/* 4 */ {Run}",
    );
    let overlay = engine().compute_overlay(&buffer);

    let rhyme_hues: Vec<u16> = overlay
        .annotations
        .iter()
        .filter_map(|a| match a.style {
            StyleDirective::Background { color } if color.saturation == 50 => Some(color.hue),
            _ => None,
        })
        .collect();
    assert_eq!(rhyme_hues, vec![0, 60, 0, 120]);
}

#[test]
fn test_trailing_word_highlight_targets_the_later_offset() {
    let buffer = TestBuffer::new("/* 1 */ {echo echo}");
    let overlay = engine().compute_overlay(&buffer);

    let rhyme_spans: Vec<Span> = overlay
        .annotations
        .iter()
        .filter_map(|a| match a.style {
            StyleDirective::Background { color } if color.saturation == 50 => Some(a.span),
            _ => None,
        })
        .collect();
    assert_eq!(rhyme_spans, vec![Span::new(14, 18)]);
}

#[test]
fn test_malformed_line_degrades_without_aborting_the_pass() {
    let buffer = TestBuffer::new("/* 2 */ no braces\n/* 3 */ {Osc.ar * 2}");
    let overlay = engine().compute_overlay(&buffer);

    // the braceless line contributes nothing; its sibling is untouched
    assert_eq!(overlay.len(), 3);
    assert_eq!(overlay.annotations[0].span, Span::new(18, 25));
}

#[test]
fn test_zero_syllables_suppresses_the_marker_range() {
    let buffer = TestBuffer::new("/* 0 */ {}");
    let overlay = engine().compute_overlay(&buffer);

    // no syllables and no rhyme: only the bracket range survives
    assert_eq!(
        overlay.annotations,
        vec![Annotation::new(
            Span::new(7, 9),
            StyleDirective::Opacity { value: 0.5 },
        )]
    );
}

#[test]
fn test_annotations_are_ordered_by_start_offset() {
    let buffer = TestBuffer::new(
        "/* 1 */ {Saw.ar * 3}\nplain line\n/* 2 */ {Pulse.kr + 1}\n/* 3 */ {Raw}",
    );
    let overlay = engine().compute_overlay(&buffer);

    assert!(!overlay.is_empty());
    assert!(overlay
        .annotations
        .windows(2)
        .all(|pair| pair[0].span.start <= pair[1].span.start));
}

#[test]
fn test_overlay_serializes_with_tagged_styles() {
    let buffer = TestBuffer::new("/* 3 */ {Osc.ar * 2}");
    let json = engine().compute_overlay(&buffer).to_json().unwrap();
    assert!(json.contains("\"kind\":\"background\""), "got {json}");
    assert!(json.contains("\"kind\":\"opacity\""), "got {json}");
}

#[test]
fn test_rate_dim_covers_unmarked_lines_too() {
    let buffer = TestBuffer::new("Osc.ar + In.kr\n/* 1 */ {Saw.ar}");
    let marks = compute_rate_dim(&buffer);

    let spans: Vec<Span> = marks.iter().map(|m| m.span).collect();
    assert_eq!(
        spans,
        vec![Span::new(3, 6), Span::new(11, 14), Span::new(27, 30)]
    );
    assert!(marks
        .iter()
        .all(|m| m.style == StyleDirective::Opacity { value: 0.4 }));
}
