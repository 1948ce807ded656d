//! G-Code motion reader with modal state tracking
//!
//! Reads G-Code text line by line and emits one [`MotionEvent`] per move
//! in the XY plane. Only the words that shape the 2D toolpath are
//! interpreted: the motion group (G0-G3), the units (G20/G21), the
//! distance mode (G90/G91), the X/Y target and the I/J arc center offsets.
//! Everything else (Z, feed, spindle, tool, M-codes) is skipped.
//!
//! Emitted coordinates are always in millimeters.

use gcodeview_core::{GcodeError, MotionEvent, MotionMode, Vector2};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, trace, warn};

/// Millimeters per inch
const MM_PER_INCH: f64 = 25.4;

/// Distance mode (modal group 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMode {
    /// G90: X/Y are absolute coordinates
    Absolute,
    /// G91: X/Y are offsets from the current position
    Incremental,
}

/// Units mode (modal group 6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// G20: words are in inches
    Inches,
    /// G21: words are in millimeters
    Millimeters,
}

impl Units {
    /// Factor converting a word value in these units to millimeters
    pub fn to_millimeters(&self) -> f64 {
        match self {
            Self::Inches => MM_PER_INCH,
            Self::Millimeters => 1.0,
        }
    }
}

/// Modal state relevant to 2D motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalState {
    /// Motion mode - Group 1 (G00/G01 linear, G02 clockwise, G03 counter-clockwise)
    pub motion_mode: MotionMode,
    /// Units mode - Group 6 (G20 inches, G21 millimeters)
    pub units: Units,
    /// Distance mode - Group 3 (G90 absolute, G91 incremental)
    pub distance_mode: DistanceMode,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            motion_mode: MotionMode::Linear,
            units: Units::Millimeters,
            distance_mode: DistanceMode::Absolute,
        }
    }
}

/// Number of events emitted per motion mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MotionCounts {
    pub linear: usize,
    pub clockwise: usize,
    pub counter_clockwise: usize,
}

impl MotionCounts {
    fn record(&mut self, mode: MotionMode) {
        match mode {
            MotionMode::Linear => self.linear += 1,
            MotionMode::ArcClockwise => self.clockwise += 1,
            MotionMode::ArcCounterClockwise => self.counter_clockwise += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.linear + self.clockwise + self.counter_clockwise
    }
}

/// Words of one line that affect the 2D toolpath
#[derive(Debug, Default)]
struct MotionWords {
    x: Option<f64>,
    y: Option<f64>,
    i: Option<f64>,
    j: Option<f64>,
}

impl MotionWords {
    fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x.map(|x| x * factor),
            y: self.y.map(|y| y * factor),
            i: self.i.map(|i| i * factor),
            j: self.j.map(|j| j * factor),
        }
    }
}

/// Line-oriented G-Code reader producing motion events
#[derive(Debug, Clone, Default)]
pub struct GcodeReader {
    state: ModalState,
    position: Vector2,
    counts: MotionCounts,
}

impl GcodeReader {
    /// Create a reader at the origin with default modal state (G0, G21, G90)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal_state(&self) -> ModalState {
        self.state
    }

    /// Current tool position in the XY plane
    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn counts(&self) -> MotionCounts {
        self.counts
    }

    /// Read a whole program
    pub fn read(&mut self, text: &str) -> Result<Vec<MotionEvent>, GcodeError> {
        debug!("Reading G-code, input size: {} bytes", text.len());

        let mut events = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let line_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
            if let Some(event) = self.read_line(line_number, line)? {
                events.push(event);
            }
        }

        debug!(
            "Read complete: linear={}, cw={}, ccw={}, total events={}",
            self.counts.linear,
            self.counts.clockwise,
            self.counts.counter_clockwise,
            events.len()
        );
        Ok(events)
    }

    /// Read one line, returning the move it commands, if any
    pub fn read_line(
        &mut self,
        line_number: u32,
        line: &str,
    ) -> Result<Option<MotionEvent>, GcodeError> {
        let cleaned = remove_comments(line);
        // Units apply to the whole line, including a G20/G21 on it.
        let words = self
            .scan_words(line_number, &cleaned)?
            .scaled(self.state.units.to_millimeters());

        let is_arc = self.state.motion_mode.is_arc();
        let has_target = words.x.is_some() || words.y.is_some();
        let has_center = words.i.is_some() || words.j.is_some();
        if !has_target && !(is_arc && has_center) {
            return Ok(None);
        }

        let start = self.position;
        let end = match self.state.distance_mode {
            DistanceMode::Absolute => {
                Vector2::new(words.x.unwrap_or(start.x), words.y.unwrap_or(start.y))
            }
            DistanceMode::Incremental => {
                start + Vector2::new(words.x.unwrap_or(0.0), words.y.unwrap_or(0.0))
            }
        };

        let mode = self.state.motion_mode;
        let event = if is_arc {
            if !has_center {
                warn!(
                    "Line {}: arc without I/J offsets, center defaults to the start point",
                    line_number
                );
            }
            let center = start + Vector2::new(words.i.unwrap_or(0.0), words.j.unwrap_or(0.0));
            MotionEvent::arc(mode, start, end, center)
        } else {
            MotionEvent::line(start, end)
        };

        trace!("Line {}: {} {} -> {}", line_number, mode, start, end);
        self.counts.record(mode);
        self.position = end;
        Ok(Some(event))
    }

    fn scan_words(&mut self, line_number: u32, cleaned: &str) -> Result<MotionWords, GcodeError> {
        let mut words = MotionWords::default();

        for capture in word_regex().captures_iter(cleaned) {
            let letter = capture[1].to_ascii_uppercase();
            let raw = &capture[2];
            match letter.as_str() {
                "G" => {
                    let code = parse_value(line_number, "G", raw)?;
                    self.apply_g_code(line_number, code);
                }
                "X" => words.x = Some(parse_value(line_number, "X", raw)?),
                "Y" => words.y = Some(parse_value(line_number, "Y", raw)?),
                "I" => words.i = Some(parse_value(line_number, "I", raw)?),
                "J" => words.j = Some(parse_value(line_number, "J", raw)?),
                _ => {}
            }
        }

        Ok(words)
    }

    fn apply_g_code(&mut self, line_number: u32, code: f64) {
        // Sub-codes such as G38.2 or G61.1 do not touch the tracked groups.
        if code.fract() != 0.0 || !(0.0..=255.0).contains(&code) {
            trace!("Line {}: ignoring G{}", line_number, code);
            return;
        }
        let code = code as u8;

        if let Some(mode) = MotionMode::from_motion_code(code) {
            self.state.motion_mode = mode;
            return;
        }
        match code {
            20 => self.state.units = Units::Inches,
            21 => self.state.units = Units::Millimeters,
            90 => self.state.distance_mode = DistanceMode::Absolute,
            91 => self.state.distance_mode = DistanceMode::Incremental,
            _ => trace!("Line {}: ignoring G{}", line_number, code),
        }
    }
}

/// Remove `( ... )` and `; ...` comments from a G-Code line
fn remove_comments(line: &str) -> String {
    static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = COMMENT_REGEX
        .get_or_init(|| Regex::new(r"\([^)]*\)?|;.*").expect("invalid regex pattern"));
    regex.replace_all(line, " ").to_string()
}

fn word_regex() -> &'static Regex {
    static WORD_REGEX: OnceLock<Regex> = OnceLock::new();
    WORD_REGEX
        .get_or_init(|| Regex::new(r"([A-Za-z])\s*([^A-Za-z\s]*)").expect("invalid regex pattern"))
}

fn parse_value(line_number: u32, param: &str, raw: &str) -> Result<f64, GcodeError> {
    let invalid = |reason: String| GcodeError::InvalidParameter {
        line_number,
        param: param.to_string(),
        reason,
    };

    if raw.is_empty() {
        return Err(invalid("missing value".to_string()));
    }
    let value = raw
        .parse::<f64>()
        .map_err(|_| invalid(format!("not a number: '{}'", raw)))?;
    if !value.is_finite() {
        return Err(invalid(format!("non-finite value: '{}'", raw)));
    }
    Ok(value)
}
