//! Web Audio graph construction and microphone capture.
//!
//! SYSTEM CONTEXT
//! ==============
//! The interview page needs two analyser graphs: one tapping the
//! pre-recorded interviewer track on its way to the speakers, one tapping
//! the live microphone stream (never routed to the speakers, so there is no
//! monitor loopback). This module owns all `web_sys` audio plumbing so the
//! page only deals in analysers, streams and blobs.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AnalyserNode, AudioContext, Blob, BlobEvent, HtmlAudioElement, MediaElementAudioSourceNode, MediaRecorder,
    MediaStream, MediaStreamAudioSourceNode, MediaStreamConstraints, MediaStreamTrack,
};

use waveform::consts::FFT_SIZE;

/// Analyser graph over a pre-recorded audio element.
///
/// Audio flows element → analyser → destination, so the track is audible
/// while the analyser observes it.
pub struct ElementGraph {
    pub context: AudioContext,
    pub analyser: AnalyserNode,
    pub element: HtmlAudioElement,
    _source: MediaElementAudioSourceNode,
}

/// Analyser graph over a live microphone stream.
///
/// The source connects only to the analyser; the microphone is never played
/// back through the speakers.
pub struct StreamGraph {
    pub context: AudioContext,
    pub analyser: AnalyserNode,
    pub stream: MediaStream,
    _source: MediaStreamAudioSourceNode,
}

/// Build the interviewer graph around an audio element for `src`.
///
/// # Errors
///
/// Returns `Err` if the audio context or any node cannot be created (for
/// example when the element is already attached to another context).
pub fn element_analyser(src: &str) -> Result<ElementGraph, JsValue> {
    let context = AudioContext::new()?;
    let element = HtmlAudioElement::new_with_src(src)?;

    let analyser = context.create_analyser()?;
    analyser.set_fft_size(FFT_SIZE);

    let source = context.create_media_element_source(&element)?;
    source.connect_with_audio_node(&analyser)?;
    analyser.connect_with_audio_node(&context.destination())?;

    Ok(ElementGraph { context, analyser, element, _source: source })
}

/// Request microphone access and return the granted stream.
///
/// # Errors
///
/// Returns `Err` when the user denies permission, no input device exists,
/// or the browser rejects the constraints.
pub async fn capture_microphone() -> Result<MediaStream, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let devices = window.navigator().media_devices()?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);

    let stream = JsFuture::from(devices.get_user_media_with_constraints(&constraints)?).await?;
    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| JsValue::from_str("getUserMedia returned a non-stream value"))
}

/// Build the interviewee graph around a live microphone stream.
///
/// # Errors
///
/// Returns `Err` if the audio context or any node cannot be created.
pub fn stream_analyser(stream: &MediaStream) -> Result<StreamGraph, JsValue> {
    let context = AudioContext::new()?;

    let analyser = context.create_analyser()?;
    analyser.set_fft_size(FFT_SIZE);

    let source = context.create_media_stream_source(stream)?;
    source.connect_with_audio_node(&analyser)?;

    Ok(StreamGraph { context, analyser, stream: stream.clone(), _source: source })
}

/// Stop every track on a stream, releasing the microphone indicator.
pub fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Fill `buffer` with the analyser's current time-domain frame, resizing it
/// to the analyser's bin count on first use.
pub fn time_domain(analyser: &AnalyserNode, buffer: &mut Vec<u8>) {
    let bins = analyser.frequency_bin_count() as usize;
    if buffer.len() != bins {
        buffer.resize(bins, waveform::consts::CENTER_BYTE);
    }
    analyser.get_byte_time_domain_data(buffer);
}

/// Close an audio context, releasing its output device handle.
pub fn close_context(context: &AudioContext) {
    // The close promise is fire-and-forget; a context that fails to close
    // is reclaimed with the page anyway.
    let _ = context.close();
}

/// A `MediaRecorder` accumulating data chunks until stopped.
pub struct Recorder {
    inner: MediaRecorder,
    chunks: Rc<RefCell<Vec<Blob>>>,
    _ondata: Closure<dyn FnMut(BlobEvent)>,
}

impl Recorder {
    /// Start recording the given stream with the browser's default container.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the stream has no recordable tracks or recording
    /// is not supported for the negotiated format.
    pub fn start(stream: &MediaStream) -> Result<Self, JsValue> {
        let inner = MediaRecorder::new_with_media_stream(stream)?;

        let chunks = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&chunks);
        let ondata = Closure::wrap(Box::new(move |event: BlobEvent| {
            if let Some(blob) = event.data() {
                sink.borrow_mut().push(blob);
            }
        }) as Box<dyn FnMut(BlobEvent)>);
        inner.set_ondataavailable(Some(ondata.as_ref().unchecked_ref()));

        inner.start()?;
        Ok(Self { inner, chunks, _ondata: ondata })
    }

    /// Stop the recorder, wait for the final data chunk, and assemble the
    /// full recording into one blob.
    ///
    /// The `dataavailable` event for the tail of the recording fires before
    /// `stop`, so awaiting `stop` guarantees the chunk list is complete.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the recorder refuses to stop or blob assembly fails.
    pub async fn stop_and_collect(self) -> Result<Blob, JsValue> {
        let stopped = JsFuture::from(js_sys::Promise::new(&mut |resolve, _reject| {
            let _ = self.inner.add_event_listener_with_callback("stop", &resolve);
        }));
        self.inner.stop()?;
        stopped.await?;

        let parts = js_sys::Array::new();
        for blob in self.chunks.borrow_mut().drain(..) {
            parts.push(&blob);
        }
        Blob::new_with_blob_sequence(&parts)
    }
}
