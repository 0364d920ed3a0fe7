//! Classifies a target ad size into a composition bucket used to steer the
//! image-generation prompt.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectBucket {
    WideLandscape,
    Landscape,
    Square,
    Portrait,
    TallPortrait,
}

#[derive(Debug, Clone, Copy)]
pub struct AspectHints {
    pub bucket: AspectBucket,
    pub framing: &'static str,
    pub composition: &'static str,
}

/// Maps a target (width, height) to its aspect bucket and the framing hints
/// appended to the generation prompt. Thresholds are half-open on the ratio,
/// first match wins; every positive ratio lands in exactly one bucket.
pub fn classify(width: u32, height: u32) -> AspectHints {
    let ratio = width as f64 / height as f64;
    if ratio > 1.5 {
        AspectHints {
            bucket: AspectBucket::WideLandscape,
            framing: "wide landscape format (16:9 or wider)",
            composition: "horizontal composition with subjects positioned to fill the wide frame",
        }
    } else if ratio > 1.2 {
        AspectHints {
            bucket: AspectBucket::Landscape,
            framing: "landscape format",
            composition: "horizontal composition",
        }
    } else if ratio > 0.85 {
        AspectHints {
            bucket: AspectBucket::Square,
            framing: "square format (1:1)",
            composition: "centered composition with subjects filling the square frame",
        }
    } else if ratio > 0.6 {
        AspectHints {
            bucket: AspectBucket::Portrait,
            framing: "portrait format (4:5)",
            composition: "vertical composition with more headroom",
        }
    } else {
        AspectHints {
            bucket: AspectBucket::TallPortrait,
            framing: "tall portrait format (9:16 story)",
            composition: "full vertical composition from head to below waist, story-style framing",
        }
    }
}
