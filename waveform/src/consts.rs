//! Shared numeric constants for the waveform crate.

// ── Analyser ────────────────────────────────────────────────────

/// FFT window size configured on every `AnalyserNode`.
pub const FFT_SIZE: u32 = 2048;

/// Time-domain frame length (`frequencyBinCount` is half the FFT size).
pub const FRAME_LEN: usize = (FFT_SIZE / 2) as usize;

/// The unsigned-byte value an analyser reports for silence.
pub const CENTER_BYTE: u8 = 128;

// ── Drawing ─────────────────────────────────────────────────────

/// Stroke width of the waveform polyline, in CSS pixels.
pub const LINE_WIDTH: f64 = 2.0;
