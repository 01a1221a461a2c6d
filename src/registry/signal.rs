//! Dispatch signatures for the public signal API.
//!
//! One [`ProbeSpec`] per public function, plus one registry key per alias.
//! Each parameter table mirrors the public function's signature exactly:
//! names, order, defaults and keyword-only markers. Which parameters count
//! as array-bearing was taken from the per-function documentation of the
//! public API, not inferred from types.
//!
//! Alias groups (several public names with identical argument shape) share
//! one `ProbeSpec` static, so the relationship stays a single definition
//! rather than copies that could drift apart.

use super::{BoundArgs, Candidates, DefaultValue, Param, ProbeKind, ProbeSpec};
use crate::arg::ArgValue;
use crate::classify::{skip_if_int, skip_if_poly1d, skip_if_system, skip_if_window_spec};

// Shorthand for the signature tables.
const fn req(name: &'static str) -> Param {
    Param::required(name)
}
const fn opt(name: &'static str, default: DefaultValue) -> Param {
    Param::optional(name, default)
}
const fn kw(name: &'static str, default: DefaultValue) -> Param {
    Param::keyword(name, default)
}
const VARARGS: Param = Param::varargs();
const VARKWARGS: Param = Param::varkwargs();
const NONE: DefaultValue = DefaultValue::None;

/// Clone the named bound arguments into a candidate set.
fn gather(bound: &BoundArgs, names: &[&str]) -> Candidates {
    names.iter().map(|name| bound.arg(name).clone()).collect()
}

/// Splat the system classifier's tuple into the candidate list, mirroring
/// tuple unpacking at the resolver call site.
fn push_system(out: &mut Candidates, system: &ArgValue) {
    match skip_if_system(system) {
        ArgValue::Tuple(elements) => out.extend(elements),
        other => out.push(other),
    }
}

// ============================================================================
// State space and filter design
// ============================================================================

static ABCD_NORMALIZE: ProbeSpec = ProbeSpec {
    name: "abcd_normalize",
    params: &[opt("A", NONE), opt("B", NONE), opt("C", NONE), opt("D", NONE)],
    kind: ProbeKind::Select(|b| gather(b, &["A", "B", "C", "D"])),
};

static ARGRELEXTREMA: ProbeSpec = ProbeSpec {
    name: "argrelextrema",
    params: &[req("data"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["data"])),
};

static BAND_STOP_OBJ: ProbeSpec = ProbeSpec {
    name: "band_stop_obj",
    params: &[
        req("wp"),
        req("ind"),
        req("passb"),
        req("stopb"),
        req("gpass"),
        req("gstop"),
        req("type"),
    ],
    kind: ProbeKind::Select(|b| gather(b, &["passb", "stopb"])),
};

// The IIR designers only dispatch on the critical frequencies; the order
// and ripple parameters are scalars by contract.

static BESSEL: ProbeSpec = ProbeSpec {
    name: "bessel",
    params: &[req("N"), req("Wn"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["Wn"])),
};

static CHEBY1: ProbeSpec = ProbeSpec {
    name: "cheby1",
    params: &[req("N"), req("rp"), req("Wn"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["Wn"])),
};

static CHEBY2: ProbeSpec = ProbeSpec {
    name: "cheby2",
    params: &[req("N"), req("rs"), req("Wn"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["Wn"])),
};

static ELLIP: ProbeSpec = ProbeSpec {
    name: "ellip",
    params: &[req("N"), req("rp"), req("rs"), req("Wn"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["Wn"])),
};

static IIRFILTER: ProbeSpec = ProbeSpec {
    name: "iirfilter",
    params: &[req("N"), req("Wn"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["Wn"])),
};

static IIRDESIGN: ProbeSpec = ProbeSpec {
    name: "iirdesign",
    params: &[req("wp"), req("ws"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["wp", "ws"])),
};

// ============================================================================
// No array inputs (arrays or scalars out): statically the host namespace
// ============================================================================

static BESSELAP: ProbeSpec = ProbeSpec {
    name: "besselap",
    params: &[req("N"), opt("norm", DefaultValue::Str("phase"))],
    kind: ProbeKind::HostOnly,
};

static BUTTAP: ProbeSpec = ProbeSpec {
    name: "buttap",
    params: &[req("N")],
    kind: ProbeKind::HostOnly,
};

static CHEB1AP: ProbeSpec = ProbeSpec {
    name: "cheb1ap",
    params: &[req("N"), req("rp")],
    kind: ProbeKind::HostOnly,
};

static CHEB2AP: ProbeSpec = ProbeSpec {
    name: "cheb2ap",
    params: &[req("N"), req("rs")],
    kind: ProbeKind::HostOnly,
};

static ELLIPAP: ProbeSpec = ProbeSpec {
    name: "ellipap",
    params: &[req("N"), req("rp"), req("rs")],
    kind: ProbeKind::HostOnly,
};

static CORRELATION_LAGS: ProbeSpec = ProbeSpec {
    name: "correlation_lags",
    params: &[
        req("in1_len"),
        req("in2_len"),
        opt("mode", DefaultValue::Str("full")),
    ],
    kind: ProbeKind::HostOnly,
};

static CZT_POINTS: ProbeSpec = ProbeSpec {
    name: "czt_points",
    params: &[
        req("m"),
        opt("w", NONE),
        opt("a", DefaultValue::Complex { re: 1.0, im: 0.0 }),
    ],
    kind: ProbeKind::HostOnly,
};

static GAMMATONE: ProbeSpec = ProbeSpec {
    name: "gammatone",
    params: &[
        req("freq"),
        req("ftype"),
        opt("order", NONE),
        opt("numtaps", NONE),
        opt("fs", NONE),
    ],
    kind: ProbeKind::HostOnly,
};

static IIRCOMB: ProbeSpec = ProbeSpec {
    name: "iircomb",
    params: &[
        req("w0"),
        req("Q"),
        opt("ftype", DefaultValue::Str("notch")),
        opt("fs", DefaultValue::Float(2.0)),
        kw("pass_zero", DefaultValue::Bool(false)),
    ],
    kind: ProbeKind::HostOnly,
};

static IIRNOTCH: ProbeSpec = ProbeSpec {
    name: "iirnotch",
    params: &[req("w0"), req("Q"), opt("fs", DefaultValue::Float(2.0))],
    kind: ProbeKind::HostOnly,
};

static IIRPEAK: ProbeSpec = ProbeSpec {
    name: "iirpeak",
    params: &[req("w0"), req("Q"), opt("fs", DefaultValue::Float(2.0))],
    kind: ProbeKind::HostOnly,
};

static SAVGOL_COEFFS: ProbeSpec = ProbeSpec {
    name: "savgol_coeffs",
    params: &[
        req("window_length"),
        req("polyorder"),
        opt("deriv", DefaultValue::Int(0)),
        opt("delta", DefaultValue::Float(1.0)),
        opt("pos", NONE),
        opt("use", DefaultValue::Str("conv")),
    ],
    kind: ProbeKind::HostOnly,
};

static UNIT_IMPULSE: ProbeSpec = ProbeSpec {
    name: "unit_impulse",
    params: &[
        req("shape"),
        opt("idx", NONE),
        opt("dtype", DefaultValue::Str("float")),
    ],
    kind: ProbeKind::HostOnly,
};

// Order selectors: scalar band edges in, scalar order out.

static BUTTORD: ProbeSpec = ProbeSpec {
    name: "buttord",
    params: &[
        req("wp"),
        req("ws"),
        req("gpass"),
        req("gstop"),
        opt("analog", DefaultValue::Bool(false)),
        opt("fs", NONE),
    ],
    kind: ProbeKind::HostOnly,
};

static CHEB1ORD: ProbeSpec = ProbeSpec {
    name: "cheb1ord",
    params: &[
        req("wp"),
        req("ws"),
        req("gpass"),
        req("gstop"),
        opt("analog", DefaultValue::Bool(false)),
        opt("fs", NONE),
    ],
    kind: ProbeKind::HostOnly,
};

static CHEB2ORD: ProbeSpec = ProbeSpec {
    name: "cheb2ord",
    params: &[
        req("wp"),
        req("ws"),
        req("gpass"),
        req("gstop"),
        opt("analog", DefaultValue::Bool(false)),
        opt("fs", NONE),
    ],
    kind: ProbeKind::HostOnly,
};

static ELLIPORD: ProbeSpec = ProbeSpec {
    name: "ellipord",
    params: &[
        req("wp"),
        req("ws"),
        req("gpass"),
        req("gstop"),
        opt("analog", DefaultValue::Bool(false)),
        opt("fs", NONE),
    ],
    kind: ProbeKind::HostOnly,
};

// Scalars in, scalars out.

static KAISER_ATTEN: ProbeSpec = ProbeSpec {
    name: "kaiser_atten",
    params: &[req("numtaps"), req("width")],
    kind: ProbeKind::HostOnly,
};

static KAISER_BETA: ProbeSpec = ProbeSpec {
    name: "kaiser_beta",
    params: &[req("a")],
    kind: ProbeKind::HostOnly,
};

static KAISERORD: ProbeSpec = ProbeSpec {
    name: "kaiserord",
    params: &[req("ripple"), req("width")],
    kind: ProbeKind::HostOnly,
};

static GET_WINDOW: ProbeSpec = ProbeSpec {
    name: "get_window",
    params: &[
        req("window"),
        req("Nx"),
        opt("fftbins", DefaultValue::Bool(true)),
    ],
    kind: ProbeKind::HostOnly,
};

// ============================================================================
// LTI system responses: the system argument is splatted through the
// overload classifier
// ============================================================================

static BODE: ProbeSpec = ProbeSpec {
    name: "bode",
    params: &[req("system"), opt("w", NONE), opt("n", DefaultValue::Int(100))],
    kind: ProbeKind::Select(|b| {
        let mut c = Candidates::new();
        push_system(&mut c, b.arg("system"));
        c.push(b.arg("w").clone());
        c
    }),
};

static FREQRESP: ProbeSpec = ProbeSpec {
    name: "freqresp",
    params: &[
        req("system"),
        opt("w", NONE),
        opt("n", DefaultValue::Int(10000)),
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = Candidates::new();
        push_system(&mut c, b.arg("system"));
        c.push(b.arg("w").clone());
        c
    }),
};

static IMPULSE: ProbeSpec = ProbeSpec {
    name: "impulse",
    params: &[
        req("system"),
        opt("X0", NONE),
        opt("T", NONE),
        opt("N", NONE),
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = Candidates::new();
        push_system(&mut c, b.arg("system"));
        c.push(b.arg("X0").clone());
        c.push(b.arg("T").clone());
        c
    }),
};

static DIMPULSE: ProbeSpec = ProbeSpec {
    name: "dimpulse",
    params: &[
        req("system"),
        opt("x0", NONE),
        opt("t", NONE),
        opt("n", NONE),
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = Candidates::new();
        push_system(&mut c, b.arg("system"));
        c.push(b.arg("x0").clone());
        c.push(b.arg("t").clone());
        c
    }),
};

static LSIM: ProbeSpec = ProbeSpec {
    name: "lsim",
    params: &[
        req("system"),
        req("U"),
        req("T"),
        opt("X0", NONE),
        opt("interp", DefaultValue::Bool(true)),
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = Candidates::new();
        push_system(&mut c, b.arg("system"));
        c.push(b.arg("U").clone());
        c.push(b.arg("T").clone());
        c.push(b.arg("X0").clone());
        c
    }),
};

static DLSIM: ProbeSpec = ProbeSpec {
    name: "dlsim",
    params: &[req("system"), req("u"), opt("t", NONE), opt("x0", NONE)],
    kind: ProbeKind::Select(|b| {
        let mut c = Candidates::new();
        push_system(&mut c, b.arg("system"));
        c.push(b.arg("u").clone());
        c.push(b.arg("t").clone());
        c.push(b.arg("x0").clone());
        c
    }),
};

static STEP: ProbeSpec = ProbeSpec {
    name: "step",
    params: &[
        req("system"),
        opt("X0", NONE),
        opt("T", NONE),
        opt("N", NONE),
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = Candidates::new();
        push_system(&mut c, b.arg("system"));
        c.push(b.arg("X0").clone());
        c.push(b.arg("T").clone());
        c
    }),
};

static DSTEP: ProbeSpec = ProbeSpec {
    name: "dstep",
    params: &[
        req("system"),
        opt("x0", NONE),
        opt("t", NONE),
        opt("n", NONE),
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = Candidates::new();
        push_system(&mut c, b.arg("system"));
        c.push(b.arg("x0").clone());
        c.push(b.arg("t").clone());
        c
    }),
};

static CONT2DISCRETE: ProbeSpec = ProbeSpec {
    name: "cont2discrete",
    params: &[
        req("system"),
        req("dt"),
        opt("method", DefaultValue::Str("zoh")),
        opt("alpha", NONE),
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = Candidates::new();
        push_system(&mut c, b.arg("system"));
        c
    }),
};

// ============================================================================
// Transforms between filter representations
// ============================================================================

static BILINEAR: ProbeSpec = ProbeSpec {
    name: "bilinear",
    params: &[req("b"), req("a"), opt("fs", DefaultValue::Float(1.0))],
    kind: ProbeKind::Select(|b| gather(b, &["b", "a"])),
};

static BILINEAR_ZPK: ProbeSpec = ProbeSpec {
    name: "bilinear_zpk",
    params: &[req("z"), req("p"), req("k"), req("fs")],
    kind: ProbeKind::Select(|b| gather(b, &["z", "p"])),
};

static LP2BP: ProbeSpec = ProbeSpec {
    name: "lp2bp",
    params: &[req("b"), req("a"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["b", "a"])),
};

static LP2BP_ZPK: ProbeSpec = ProbeSpec {
    name: "lp2bp_zpk",
    params: &[req("z"), req("p"), req("k"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["z", "p"])),
};

static ZPK2SOS: ProbeSpec = ProbeSpec {
    name: "zpk2sos",
    params: &[req("z"), req("p"), req("k"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["z", "p"])),
};

static SOS2TF: ProbeSpec = ProbeSpec {
    name: "sos2tf",
    params: &[req("sos")],
    kind: ProbeKind::Select(|b| gather(b, &["sos"])),
};

static SS2TF: ProbeSpec = ProbeSpec {
    name: "ss2tf",
    params: &[
        req("A"),
        req("B"),
        req("C"),
        req("D"),
        opt("input", DefaultValue::Int(0)),
    ],
    kind: ProbeKind::Select(|b| gather(b, &["A", "B", "C", "D"])),
};

static TF2SS: ProbeSpec = ProbeSpec {
    name: "tf2ss",
    params: &[req("num"), req("den")],
    kind: ProbeKind::Select(|b| gather(b, &["num", "den"])),
};

static INVRES: ProbeSpec = ProbeSpec {
    name: "invres",
    params: &[
        req("r"),
        req("p"),
        req("k"),
        opt("tol", DefaultValue::Float(0.001)),
        opt("rtype", DefaultValue::Str("avg")),
    ],
    kind: ProbeKind::Select(|b| gather(b, &["r", "p", "k"])),
};

static UNIQUE_ROOTS: ProbeSpec = ProbeSpec {
    name: "unique_roots",
    params: &[
        req("p"),
        opt("tol", DefaultValue::Float(0.001)),
        opt("rtype", DefaultValue::Str("min")),
    ],
    kind: ProbeKind::Select(|b| gather(b, &["p"])),
};

// ============================================================================
// Waveform generation
// ============================================================================

static CHIRP: ProbeSpec = ProbeSpec {
    name: "chirp",
    params: &[req("t"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["t"])),
};

static GAUSSPULSE: ProbeSpec = ProbeSpec {
    name: "gausspulse",
    params: &[req("t"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| {
        // `t` may be the string 'cutoff'
        let t = b.arg("t");
        let mut c = Candidates::new();
        c.push(match t {
            ArgValue::Str(_) => ArgValue::None,
            _ => t.clone(),
        });
        c
    }),
};

static SAWTOOTH: ProbeSpec = ProbeSpec {
    name: "sawtooth",
    params: &[req("t"), opt("width", DefaultValue::Int(1))],
    kind: ProbeKind::Select(|b| gather(b, &["t"])),
};

static SQUARE: ProbeSpec = ProbeSpec {
    name: "square",
    params: &[req("t"), opt("duty", DefaultValue::Float(0.5))],
    kind: ProbeKind::Select(|b| gather(b, &["t"])),
};

static SWEEP_POLY: ProbeSpec = ProbeSpec {
    name: "sweep_poly",
    params: &[req("t"), req("poly"), opt("phi", DefaultValue::Int(0))],
    kind: ProbeKind::Select(|b| {
        let mut c = gather(b, &["t"]);
        c.push(skip_if_poly1d(b.arg("poly")));
        c
    }),
};

static MAX_LEN_SEQ: ProbeSpec = ProbeSpec {
    name: "max_len_seq",
    params: &[
        req("nbits"),
        opt("state", NONE),
        opt("length", NONE),
        opt("taps", NONE),
    ],
    kind: ProbeKind::Select(|b| gather(b, &["state", "taps"])),
};

// ============================================================================
// Convolution and correlation
// ============================================================================

static CHOOSE_CONV_METHOD: ProbeSpec = ProbeSpec {
    name: "choose_conv_method",
    params: &[req("in1"), req("in2"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["in1", "in2"])),
};

static CONVOLVE: ProbeSpec = ProbeSpec {
    name: "convolve",
    params: &[req("in1"), req("in2"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["in1", "in2"])),
};

static DECONVOLVE: ProbeSpec = ProbeSpec {
    name: "deconvolve",
    params: &[req("signal"), req("divisor")],
    kind: ProbeKind::Select(|b| gather(b, &["signal", "divisor"])),
};

// ============================================================================
// Spectral estimation: the window argument may be a name, a spec tuple, a
// callback, or explicit coefficients; only the last carries arrays
// ============================================================================

static COHERENCE: ProbeSpec = ProbeSpec {
    name: "coherence",
    params: &[
        req("x"),
        req("y"),
        opt("fs", DefaultValue::Float(1.0)),
        opt("window", DefaultValue::Str("hann")),
        VARARGS,
        VARKWARGS,
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = gather(b, &["x", "y"]);
        c.push(skip_if_window_spec(b.arg("window")));
        c
    }),
};

static CSD: ProbeSpec = ProbeSpec {
    name: "csd",
    params: &[
        req("x"),
        req("y"),
        opt("fs", DefaultValue::Float(1.0)),
        opt("window", DefaultValue::Str("hann")),
        VARARGS,
        VARKWARGS,
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = gather(b, &["x", "y"]);
        c.push(skip_if_window_spec(b.arg("window")));
        c
    }),
};

static PERIODOGRAM: ProbeSpec = ProbeSpec {
    name: "periodogram",
    params: &[
        req("x"),
        opt("fs", DefaultValue::Float(1.0)),
        opt("window", DefaultValue::Str("boxcar")),
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = gather(b, &["x"]);
        c.push(skip_if_window_spec(b.arg("window")));
        c
    }),
};

static WELCH: ProbeSpec = ProbeSpec {
    name: "welch",
    params: &[
        req("x"),
        opt("fs", DefaultValue::Float(1.0)),
        opt("window", DefaultValue::Str("hann")),
        VARARGS,
        VARKWARGS,
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = gather(b, &["x"]);
        c.push(skip_if_window_spec(b.arg("window")));
        c
    }),
};

static SPECTROGRAM: ProbeSpec = ProbeSpec {
    name: "spectrogram",
    params: &[
        req("x"),
        opt("fs", DefaultValue::Float(1.0)),
        opt(
            "window",
            DefaultValue::Tuple(&[DefaultValue::Str("tukey"), DefaultValue::Float(0.25)]),
        ),
        VARARGS,
        VARKWARGS,
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = gather(b, &["x"]);
        c.push(skip_if_window_spec(b.arg("window")));
        c
    }),
};

static STFT: ProbeSpec = ProbeSpec {
    name: "stft",
    params: &[
        req("x"),
        opt("fs", DefaultValue::Float(1.0)),
        opt("window", DefaultValue::Str("hann")),
        VARARGS,
        VARKWARGS,
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = gather(b, &["x"]);
        c.push(skip_if_window_spec(b.arg("window")));
        c
    }),
};

static ISTFT: ProbeSpec = ProbeSpec {
    name: "istft",
    params: &[
        req("Zxx"),
        opt("fs", DefaultValue::Float(1.0)),
        opt("window", DefaultValue::Str("hann")),
        VARARGS,
        VARKWARGS,
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = gather(b, &["Zxx"]);
        c.push(skip_if_window_spec(b.arg("window")));
        c
    }),
};

static RESAMPLE: ProbeSpec = ProbeSpec {
    name: "resample",
    params: &[
        req("x"),
        req("num"),
        opt("t", NONE),
        opt("axis", DefaultValue::Int(0)),
        opt("window", NONE),
        opt("domain", DefaultValue::Str("time")),
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = gather(b, &["x", "t"]);
        c.push(skip_if_window_spec(b.arg("window")));
        c
    }),
};

static RESAMPLE_POLY: ProbeSpec = ProbeSpec {
    name: "resample_poly",
    params: &[
        req("x"),
        req("up"),
        req("down"),
        opt("axis", DefaultValue::Int(0)),
        opt(
            "window",
            DefaultValue::Tuple(&[DefaultValue::Str("kaiser"), DefaultValue::Float(5.0)]),
        ),
        VARARGS,
        VARKWARGS,
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = gather(b, &["x"]);
        c.push(skip_if_window_spec(b.arg("window")));
        c
    }),
};

static CHECK_COLA: ProbeSpec = ProbeSpec {
    name: "check_COLA",
    params: &[
        req("window"),
        req("nperseg"),
        req("noverlap"),
        opt("tol", DefaultValue::Float(1e-10)),
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = Candidates::new();
        c.push(skip_if_window_spec(b.arg("window")));
        c
    }),
};

static CHECK_NOLA: ProbeSpec = ProbeSpec {
    name: "check_NOLA",
    params: &[
        req("window"),
        req("nperseg"),
        req("noverlap"),
        opt("tol", DefaultValue::Float(1e-10)),
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = Candidates::new();
        c.push(skip_if_window_spec(b.arg("window")));
        c
    }),
};

static LOMBSCARGLE: ProbeSpec = ProbeSpec {
    name: "lombscargle",
    params: &[
        req("x"),
        req("y"),
        req("freqs"),
        opt("precenter", DefaultValue::Bool(false)),
        opt("normalize", DefaultValue::Bool(false)),
        kw("weights", NONE),
        kw("floating_mean", DefaultValue::Bool(false)),
    ],
    kind: ProbeKind::Select(|b| gather(b, &["x", "y", "freqs", "weights"])),
};

static VECTORSTRENGTH: ProbeSpec = ProbeSpec {
    name: "vectorstrength",
    params: &[req("events"), req("period")],
    kind: ProbeKind::Select(|b| gather(b, &["events", "period"])),
};

// ============================================================================
// Chirp-Z and zoom transforms
// ============================================================================

static CZT: ProbeSpec = ProbeSpec {
    name: "czt",
    params: &[req("x"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["x"])),
};

static ZOOM_FFT: ProbeSpec = ProbeSpec {
    name: "zoom_fft",
    params: &[
        req("x"),
        req("fn"),
        opt("m", NONE),
        kw("fs", DefaultValue::Int(2)),
        kw("endpoint", DefaultValue::Bool(false)),
        kw("axis", DefaultValue::Int(-1)),
    ],
    kind: ProbeKind::Select(|b| gather(b, &["x", "fn"])),
};

static HILBERT: ProbeSpec = ProbeSpec {
    name: "hilbert",
    params: &[req("x"), opt("N", NONE), opt("axis", DefaultValue::Int(-1))],
    kind: ProbeKind::Select(|b| gather(b, &["x"])),
};

// ============================================================================
// Filtering
// ============================================================================

static DETREND: ProbeSpec = ProbeSpec {
    name: "detrend",
    params: &[
        req("data"),
        opt("axis", DefaultValue::Int(1)),
        opt("type", DefaultValue::Str("linear")),
        opt("bp", DefaultValue::Int(0)),
        VARARGS,
        VARKWARGS,
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = gather(b, &["data"]);
        // break points may be given as an index array
        c.push(skip_if_int(b.arg("bp")));
        c
    }),
};

static FILTFILT: ProbeSpec = ProbeSpec {
    name: "filtfilt",
    params: &[req("b"), req("a"), req("x"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["b", "a", "x"])),
};

static LFILTER: ProbeSpec = ProbeSpec {
    name: "lfilter",
    params: &[
        req("b"),
        req("a"),
        req("x"),
        opt("axis", DefaultValue::Int(-1)),
        opt("zi", NONE),
    ],
    kind: ProbeKind::Select(|b| gather(b, &["b", "a", "x", "zi"])),
};

static LFILTER_ZI: ProbeSpec = ProbeSpec {
    name: "lfilter_zi",
    params: &[req("b"), req("a")],
    kind: ProbeKind::Select(|b| gather(b, &["b", "a"])),
};

static LFILTIC: ProbeSpec = ProbeSpec {
    name: "lfiltic",
    params: &[req("b"), req("a"), req("y"), opt("x", NONE)],
    kind: ProbeKind::Select(|b| gather(b, &["b", "a", "y", "x"])),
};

static SOSFILT: ProbeSpec = ProbeSpec {
    name: "sosfilt",
    params: &[
        req("sos"),
        req("x"),
        opt("axis", DefaultValue::Int(-1)),
        opt("zi", NONE),
    ],
    kind: ProbeKind::Select(|b| gather(b, &["sos", "x", "zi"])),
};

static SOSFILT_ZI: ProbeSpec = ProbeSpec {
    name: "sosfilt_zi",
    params: &[req("sos")],
    kind: ProbeKind::Select(|b| gather(b, &["sos"])),
};

static SOSFILTFILT: ProbeSpec = ProbeSpec {
    name: "sosfiltfilt",
    params: &[req("sos"), req("x"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["sos", "x"])),
};

static SAVGOL_FILTER: ProbeSpec = ProbeSpec {
    name: "savgol_filter",
    params: &[req("x"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["x"])),
};

static MEDFILT: ProbeSpec = ProbeSpec {
    name: "medfilt",
    params: &[req("volume"), opt("kernel_size", NONE)],
    kind: ProbeKind::Select(|b| gather(b, &["volume"])),
};

static MEDFILT2D: ProbeSpec = ProbeSpec {
    name: "medfilt2d",
    params: &[req("input"), opt("kernel_size", DefaultValue::Int(3))],
    kind: ProbeKind::Select(|b| gather(b, &["input"])),
};

static ORDER_FILTER: ProbeSpec = ProbeSpec {
    name: "order_filter",
    params: &[req("a"), req("domain"), req("rank")],
    kind: ProbeKind::Select(|b| gather(b, &["a", "domain"])),
};

static WIENER: ProbeSpec = ProbeSpec {
    name: "wiener",
    params: &[req("im"), opt("mysize", NONE), opt("noise", NONE)],
    kind: ProbeKind::Select(|b| gather(b, &["im"])),
};

static SEPFIR2D: ProbeSpec = ProbeSpec {
    name: "sepfir2d",
    params: &[req("input"), req("hrow"), req("hcol")],
    kind: ProbeKind::Select(|b| gather(b, &["input", "hrow", "hcol"])),
};

static SYMIIRORDER1: ProbeSpec = ProbeSpec {
    name: "symiirorder1",
    params: &[
        req("signal"),
        req("c0"),
        req("z1"),
        opt("precision", DefaultValue::Float(-1.0)),
    ],
    kind: ProbeKind::Select(|b| gather(b, &["signal"])),
};

static SYMIIRORDER2: ProbeSpec = ProbeSpec {
    name: "symiirorder2",
    params: &[
        req("input"),
        req("r"),
        req("omega"),
        opt("precision", DefaultValue::Float(-1.0)),
    ],
    kind: ProbeKind::Select(|b| gather(b, &["input"])),
};

static UPFIRDN: ProbeSpec = ProbeSpec {
    name: "upfirdn",
    params: &[
        req("h"),
        req("x"),
        opt("up", DefaultValue::Int(1)),
        opt("down", DefaultValue::Int(1)),
        opt("axis", DefaultValue::Int(-1)),
        opt("mode", DefaultValue::Str("constant")),
        opt("cval", DefaultValue::Int(0)),
    ],
    kind: ProbeKind::Select(|b| gather(b, &["h", "x"])),
};

static MINIMUM_PHASE: ProbeSpec = ProbeSpec {
    name: "minimum_phase",
    params: &[req("h"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["h"])),
};

// ============================================================================
// FIR design
// ============================================================================

static FIRLS: ProbeSpec = ProbeSpec {
    name: "firls",
    params: &[
        req("numtaps"),
        req("bands"),
        req("desired"),
        kw("weight", NONE),
        kw("fs", NONE),
    ],
    kind: ProbeKind::Select(|b| gather(b, &["bands", "desired", "weight"])),
};

static FIRWIN: ProbeSpec = ProbeSpec {
    name: "firwin",
    params: &[req("numtaps"), req("cutoff"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["cutoff"])),
};

static FIRWIN2: ProbeSpec = ProbeSpec {
    name: "firwin2",
    params: &[req("numtaps"), req("freq"), req("gain"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["freq", "gain"])),
};

static REMEZ: ProbeSpec = ProbeSpec {
    name: "remez",
    params: &[
        req("numtaps"),
        req("bands"),
        req("desired"),
        kw("weight", NONE),
        VARKWARGS,
    ],
    kind: ProbeKind::Select(|b| gather(b, &["bands", "desired", "weight"])),
};

// ============================================================================
// Frequency response: worN is either a count or an explicit frequency array
// ============================================================================

static FINDFREQS: ProbeSpec = ProbeSpec {
    name: "findfreqs",
    params: &[req("num"), req("den"), req("N"), opt("kind", DefaultValue::Str("ba"))],
    kind: ProbeKind::Select(|b| gather(b, &["num", "den"])),
};

static FREQS: ProbeSpec = ProbeSpec {
    name: "freqs",
    params: &[
        req("b"),
        req("a"),
        opt("worN", DefaultValue::Int(200)),
        VARARGS,
        VARKWARGS,
    ],
    kind: ProbeKind::Select(|b| {
        let mut c = gather(b, &["b", "a"]);
        c.push(skip_if_int(b.arg("worN")));
        c
    }),
};

static FREQS_ZPK: ProbeSpec = ProbeSpec {
    name: "freqs_zpk",
    params: &[req("z"), req("p"), req("k"), req("worN"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| {
        let mut c = gather(b, &["z", "p"]);
        c.push(skip_if_int(b.arg("worN")));
        c
    }),
};

static FREQZ_SOS: ProbeSpec = ProbeSpec {
    name: "freqz_sos",
    params: &[req("sos"), opt("worN", DefaultValue::Int(512)), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| {
        let mut c = gather(b, &["sos"]);
        c.push(skip_if_int(b.arg("worN")));
        c
    }),
};

static GROUP_DELAY: ProbeSpec = ProbeSpec {
    name: "group_delay",
    params: &[
        req("system"),
        opt("w", DefaultValue::Int(512)),
        opt("whole", DefaultValue::Bool(false)),
        opt("fs", DefaultValue::Float(6.283185307179586)),
    ],
    kind: ProbeKind::Select(|b| {
        // here the system is a (b, a) spec tuple, not an overload carrier
        let mut c = Candidates::new();
        c.push(skip_if_window_spec(b.arg("system")));
        c.push(skip_if_int(b.arg("w")));
        c
    }),
};

// ============================================================================
// Peak finding
// ============================================================================

static FIND_PEAKS: ProbeSpec = ProbeSpec {
    name: "find_peaks",
    params: &[
        req("x"),
        opt("height", NONE),
        opt("threshold", NONE),
        opt("distance", NONE),
        opt("prominence", NONE),
        opt("width", NONE),
        opt("wlen", NONE),
        opt("rel_height", DefaultValue::Float(0.5)),
        opt("plateau_size", NONE),
    ],
    kind: ProbeKind::Select(|b| {
        gather(
            b,
            &["x", "height", "threshold", "prominence", "width", "plateau_size"],
        )
    }),
};

static FIND_PEAKS_CWT: ProbeSpec = ProbeSpec {
    name: "find_peaks_cwt",
    params: &[
        req("vector"),
        req("widths"),
        opt("wavelet", NONE),
        opt("max_distances", NONE),
        VARARGS,
        VARKWARGS,
    ],
    kind: ProbeKind::Select(|b| gather(b, &["vector", "widths", "max_distances"])),
};

static PEAK_PROMINENCES: ProbeSpec = ProbeSpec {
    name: "peak_prominences",
    params: &[req("x"), req("peaks"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["x", "peaks"])),
};

static PLACE_POLES: ProbeSpec = ProbeSpec {
    name: "place_poles",
    params: &[
        req("A"),
        req("B"),
        req("poles"),
        opt("method", DefaultValue::Str("YT")),
        opt("rtol", DefaultValue::Float(0.001)),
        opt("maxiter", DefaultValue::Int(30)),
    ],
    kind: ProbeKind::Select(|b| gather(b, &["A", "B", "poles"])),
};

// ============================================================================
// Splines
// ============================================================================

static SPLINE_FILTER: ProbeSpec = ProbeSpec {
    name: "spline_filter",
    params: &[req("Iin"), opt("lmbda", DefaultValue::Float(5.0))],
    kind: ProbeKind::Select(|b| gather(b, &["Iin"])),
};

static CSPLINE1D: ProbeSpec = ProbeSpec {
    name: "cspline1d",
    params: &[req("signal"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["signal"])),
};

static CSPLINE1D_EVAL: ProbeSpec = ProbeSpec {
    name: "cspline1d_eval",
    params: &[req("cj"), req("newx"), VARARGS, VARKWARGS],
    kind: ProbeKind::Select(|b| gather(b, &["cj", "newx"])),
};

// ============================================================================
// Registry table: canonical names plus every alias, each alias sharing the
// canonical ProbeSpec
// ============================================================================

pub(super) static ENTRIES: &[(&str, &ProbeSpec)] = &[
    ("abcd_normalize", &ABCD_NORMALIZE),
    ("argrelextrema", &ARGRELEXTREMA),
    ("argrelmax", &ARGRELEXTREMA),
    ("argrelmin", &ARGRELEXTREMA),
    ("band_stop_obj", &BAND_STOP_OBJ),
    ("bessel", &BESSEL),
    ("butter", &BESSEL),
    ("cheby1", &CHEBY1),
    ("cheby2", &CHEBY2),
    ("ellip", &ELLIP),
    ("iirdesign", &IIRDESIGN),
    ("iirfilter", &IIRFILTER),
    ("besselap", &BESSELAP),
    ("buttap", &BUTTAP),
    ("cheb1ap", &CHEB1AP),
    ("cheb2ap", &CHEB2AP),
    ("ellipap", &ELLIPAP),
    ("correlation_lags", &CORRELATION_LAGS),
    ("czt_points", &CZT_POINTS),
    ("gammatone", &GAMMATONE),
    ("iircomb", &IIRCOMB),
    ("iirnotch", &IIRNOTCH),
    ("iirpeak", &IIRPEAK),
    ("savgol_coeffs", &SAVGOL_COEFFS),
    ("unit_impulse", &UNIT_IMPULSE),
    ("buttord", &BUTTORD),
    ("cheb1ord", &CHEB1ORD),
    ("cheb2ord", &CHEB2ORD),
    ("ellipord", &ELLIPORD),
    ("kaiser_atten", &KAISER_ATTEN),
    ("kaiser_beta", &KAISER_BETA),
    ("kaiserord", &KAISERORD),
    ("get_window", &GET_WINDOW),
    ("bode", &BODE),
    ("dbode", &BODE),
    ("freqresp", &FREQRESP),
    ("dfreqresp", &FREQRESP),
    ("impulse", &IMPULSE),
    ("dimpulse", &DIMPULSE),
    ("lsim", &LSIM),
    ("dlsim", &DLSIM),
    ("step", &STEP),
    ("dstep", &DSTEP),
    ("cont2discrete", &CONT2DISCRETE),
    ("bilinear", &BILINEAR),
    ("bilinear_zpk", &BILINEAR_ZPK),
    ("chirp", &CHIRP),
    ("choose_conv_method", &CHOOSE_CONV_METHOD),
    ("convolve", &CONVOLVE),
    ("fftconvolve", &CONVOLVE),
    ("oaconvolve", &CONVOLVE),
    ("correlate", &CONVOLVE),
    ("convolve2d", &CONVOLVE),
    ("correlate2d", &CONVOLVE),
    ("coherence", &COHERENCE),
    ("csd", &CSD),
    ("periodogram", &PERIODOGRAM),
    ("welch", &WELCH),
    ("spectrogram", &SPECTROGRAM),
    ("stft", &STFT),
    ("istft", &ISTFT),
    ("resample", &RESAMPLE),
    ("resample_poly", &RESAMPLE_POLY),
    ("check_COLA", &CHECK_COLA),
    ("check_NOLA", &CHECK_NOLA),
    ("czt", &CZT),
    ("decimate", &CZT),
    ("gauss_spline", &CZT),
    ("deconvolve", &DECONVOLVE),
    ("detrend", &DETREND),
    ("filtfilt", &FILTFILT),
    ("lfilter", &LFILTER),
    ("find_peaks", &FIND_PEAKS),
    ("find_peaks_cwt", &FIND_PEAKS_CWT),
    ("findfreqs", &FINDFREQS),
    ("firls", &FIRLS),
    ("firwin", &FIRWIN),
    ("firwin2", &FIRWIN2),
    ("freqs_zpk", &FREQS_ZPK),
    ("freqz_zpk", &FREQS_ZPK),
    ("freqs", &FREQS),
    ("freqz", &FREQS),
    ("freqz_sos", &FREQZ_SOS),
    ("sosfreqz", &FREQZ_SOS),
    ("gausspulse", &GAUSSPULSE),
    ("group_delay", &GROUP_DELAY),
    ("hilbert", &HILBERT),
    ("hilbert2", &HILBERT),
    ("invres", &INVRES),
    ("invresz", &INVRES),
    ("lfilter_zi", &LFILTER_ZI),
    ("sosfilt_zi", &SOSFILT_ZI),
    ("remez", &REMEZ),
    ("lfiltic", &LFILTIC),
    ("lombscargle", &LOMBSCARGLE),
    ("lp2bp", &LP2BP),
    ("lp2bs", &LP2BP),
    ("lp2hp", &LP2BP),
    ("lp2lp", &LP2BP),
    ("tf2zpk", &LP2BP),
    ("tf2sos", &LP2BP),
    ("normalize", &LP2BP),
    ("residue", &LP2BP),
    ("residuez", &LP2BP),
    ("lp2bp_zpk", &LP2BP_ZPK),
    ("lp2bs_zpk", &LP2BP_ZPK),
    ("lp2hp_zpk", &LP2BP_ZPK),
    ("lp2lp_zpk", &LP2BP_ZPK),
    ("zpk2sos", &ZPK2SOS),
    ("zpk2ss", &ZPK2SOS),
    ("zpk2tf", &ZPK2SOS),
    ("max_len_seq", &MAX_LEN_SEQ),
    ("medfilt", &MEDFILT),
    ("medfilt2d", &MEDFILT2D),
    ("minimum_phase", &MINIMUM_PHASE),
    ("order_filter", &ORDER_FILTER),
    ("peak_prominences", &PEAK_PROMINENCES),
    ("peak_widths", &PEAK_PROMINENCES),
    ("place_poles", &PLACE_POLES),
    ("savgol_filter", &SAVGOL_FILTER),
    ("sawtooth", &SAWTOOTH),
    ("sepfir2d", &SEPFIR2D),
    ("sos2tf", &SOS2TF),
    ("sos2zpk", &SOS2TF),
    ("sosfilt", &SOSFILT),
    ("sosfiltfilt", &SOSFILTFILT),
    ("spline_filter", &SPLINE_FILTER),
    ("square", &SQUARE),
    ("ss2tf", &SS2TF),
    ("ss2zpk", &SS2TF),
    ("sweep_poly", &SWEEP_POLY),
    ("symiirorder1", &SYMIIRORDER1),
    ("symiirorder2", &SYMIIRORDER2),
    ("cspline1d", &CSPLINE1D),
    ("qspline1d", &CSPLINE1D),
    ("cspline2d", &CSPLINE1D),
    ("qspline2d", &CSPLINE1D),
    ("cspline1d_eval", &CSPLINE1D_EVAL),
    ("qspline1d_eval", &CSPLINE1D_EVAL),
    ("tf2ss", &TF2SS),
    ("unique_roots", &UNIQUE_ROOTS),
    ("upfirdn", &UPFIRDN),
    ("vectorstrength", &VECTORSTRENGTH),
    ("wiener", &WIENER),
    ("zoom_fft", &ZOOM_FFT),
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::{probe_for, registered_names, CallArgs, ParamKind};
    use super::*;
    use crate::backend::Backend;
    use crate::resolve::{HostResolver, NamespaceResolver};

    #[test]
    fn test_every_entry_has_consistent_variadic_layout() {
        // variadic catch-alls must close the table: varargs after all
        // positional-or-keyword params, varkwargs last
        for (name, spec) in ENTRIES {
            let params = spec.params;
            if let Some(i) = params.iter().position(|p| p.kind == ParamKind::VarArgs) {
                assert!(
                    params[..i]
                        .iter()
                        .all(|p| p.kind == ParamKind::PositionalOrKeyword),
                    "{name}: params before *args must be positional-or-keyword"
                );
            }
            if let Some(i) = params.iter().position(|p| p.kind == ParamKind::VarKwargs) {
                assert_eq!(i, params.len() - 1, "{name}: **kwds must come last");
            }
            // keyword-only params sit after every positional-or-keyword one
            if let Some(first_kw) = params.iter().position(|p| p.kind == ParamKind::KeywordOnly) {
                assert!(
                    params[first_kw..]
                        .iter()
                        .all(|p| p.kind != ParamKind::PositionalOrKeyword),
                    "{name}: positional-or-keyword param after a keyword-only one"
                );
            }
        }
    }

    #[test]
    fn test_param_names_are_unique_per_entry() {
        for (name, spec) in ENTRIES {
            for (i, a) in spec.params.iter().enumerate() {
                for b in &spec.params[i + 1..] {
                    assert_ne!(a.name, b.name, "{name}: duplicate parameter");
                }
            }
        }
    }

    #[test]
    fn test_registry_covers_every_entry() {
        for (name, _) in ENTRIES {
            assert!(probe_for(name).is_ok(), "{name} missing from registry");
        }
        assert_eq!(registered_names().count(), ENTRIES.len());
    }

    #[test]
    fn test_alias_groups_share_specs() {
        let groups: &[&[&str]] = &[
            &["argrelextrema", "argrelmax", "argrelmin"],
            &["bessel", "butter"],
            &["bode", "dbode"],
            &["freqresp", "dfreqresp"],
            &[
                "convolve",
                "fftconvolve",
                "oaconvolve",
                "correlate",
                "convolve2d",
                "correlate2d",
            ],
            &["czt", "decimate", "gauss_spline"],
            &["freqs", "freqz"],
            &["freqs_zpk", "freqz_zpk"],
            &["freqz_sos", "sosfreqz"],
            &["hilbert", "hilbert2"],
            &["invres", "invresz"],
            &[
                "lp2bp", "lp2bs", "lp2hp", "lp2lp", "tf2zpk", "tf2sos", "normalize", "residue",
                "residuez",
            ],
            &["lp2bp_zpk", "lp2bs_zpk", "lp2hp_zpk", "lp2lp_zpk"],
            &["zpk2sos", "zpk2ss", "zpk2tf"],
            &["peak_prominences", "peak_widths"],
            &["sos2tf", "sos2zpk"],
            &["ss2tf", "ss2zpk"],
            &["cspline1d", "qspline1d", "cspline2d", "qspline2d"],
            &["cspline1d_eval", "qspline1d_eval"],
        ];
        for group in groups {
            let canonical = probe_for(group[0]).unwrap();
            for alias in &group[1..] {
                let probe = probe_for(alias).unwrap();
                assert!(
                    probe.shares_spec(&canonical),
                    "{alias} does not share {}'s spec",
                    group[0]
                );
            }
        }
    }

    #[test]
    fn test_aliases_yield_identical_candidates() {
        let call = CallArgs::new()
            .arg(Backend::Cuda)
            .arg(vec![0.25, 0.5, 0.25]);
        let canonical = probe_for("convolve").unwrap().candidates(&call).unwrap();
        for alias in ["fftconvolve", "oaconvolve", "correlate2d"] {
            let candidates = probe_for(alias).unwrap().candidates(&call).unwrap();
            assert_eq!(candidates, canonical, "{alias} candidates diverge");
        }
    }

    #[test]
    fn test_butter_dispatches_on_wn_only() {
        // butter(4, 0.2): N is excluded by signature design, not a classifier
        let call = CallArgs::new().arg(4i64).arg(0.2);
        let probe = probe_for("butter").unwrap();
        let candidates = probe.candidates(&call).unwrap();
        assert_eq!(candidates.as_slice(), &[ArgValue::Float(0.2)]);
        let backend = probe.resolve(&call, &HostResolver::new()).unwrap();
        assert_eq!(backend, Backend::Cpu);
    }

    #[test]
    fn test_butter_follows_device_wn() {
        let call = CallArgs::new().arg(4i64).named("Wn", Backend::Wgpu);
        let probe = probe_for("butter").unwrap();
        let backend = probe.resolve(&call, &HostResolver::new()).unwrap();
        assert_eq!(backend, Backend::Wgpu);
    }

    #[test]
    fn test_host_only_probe_ignores_arguments() {
        let probe = probe_for("buttord").unwrap();
        assert!(probe.is_host_only());
        // even device arrays do not move a host-only probe off the default
        let call = CallArgs::new()
            .arg(Backend::Cuda)
            .arg(Backend::Cuda)
            .arg(1.0)
            .arg(40.0);
        let backend = probe.resolve(&call, &HostResolver::new()).unwrap();
        assert_eq!(backend, Backend::Cpu);
    }

    #[test]
    fn test_welch_skips_window_name_but_not_coefficients() {
        let probe = probe_for("welch").unwrap();

        let named_window = CallArgs::new()
            .arg(Backend::Cuda)
            .named("window", "hann");
        let candidates = probe.candidates(&named_window).unwrap();
        assert_eq!(
            candidates.as_slice(),
            &[ArgValue::Array(Backend::Cuda), ArgValue::None]
        );

        let coeff_window = CallArgs::new()
            .arg(Backend::Cuda)
            .named("window", Backend::Cuda);
        let candidates = probe.candidates(&coeff_window).unwrap();
        assert_eq!(
            candidates.as_slice(),
            &[
                ArgValue::Array(Backend::Cuda),
                ArgValue::Array(Backend::Cuda)
            ]
        );
    }

    #[test]
    fn test_spectrogram_default_window_spec_is_skipped() {
        // default ('tukey', 0.25) must classify to the placeholder, not to
        // host data
        let call = CallArgs::new().arg(Backend::Cuda);
        let probe = probe_for("spectrogram").unwrap();
        let backend = probe.resolve(&call, &HostResolver::new()).unwrap();
        assert_eq!(backend, Backend::Cuda);
    }

    #[test]
    fn test_lti_system_tuple_is_splatted() {
        let system = ArgValue::Tuple(vec![
            ArgValue::Array(Backend::Cuda),
            ArgValue::Array(Backend::Cuda),
        ]);
        let call = CallArgs::new().arg(system);
        let probe = probe_for("bode").unwrap();
        let candidates = probe.candidates(&call).unwrap();
        assert_eq!(
            candidates.as_slice(),
            &[
                ArgValue::Array(Backend::Cuda),
                ArgValue::Array(Backend::Cuda),
                ArgValue::None,
            ]
        );
        assert_eq!(
            probe.resolve(&call, &HostResolver::new()).unwrap(),
            Backend::Cuda
        );
    }

    #[test]
    fn test_opaque_system_object_resolves_to_host() {
        // a non-tuple system collapses to (None,), so nothing votes
        let call = CallArgs::new().arg(ArgValue::Callable);
        let probe = probe_for("freqresp").unwrap();
        assert_eq!(
            probe.resolve(&call, &HostResolver::new()).unwrap(),
            Backend::Cpu
        );
    }

    #[test]
    fn test_freqs_worn_count_vs_array() {
        let probe = probe_for("freqs").unwrap();

        let counted = CallArgs::new()
            .arg(Backend::Cuda)
            .arg(Backend::Cuda)
            .named("worN", 200i64);
        let candidates = probe.candidates(&counted).unwrap();
        assert_eq!(candidates[2], ArgValue::None);

        let explicit = CallArgs::new()
            .arg(Backend::Cuda)
            .arg(Backend::Cuda)
            .named("worN", Backend::Cuda);
        let candidates = probe.candidates(&explicit).unwrap();
        assert_eq!(candidates[2], ArgValue::Array(Backend::Cuda));
    }

    #[test]
    fn test_gausspulse_cutoff_string_is_skipped() {
        let probe = probe_for("gausspulse").unwrap();
        let call = CallArgs::new().arg("cutoff");
        let candidates = probe.candidates(&call).unwrap();
        assert_eq!(candidates.as_slice(), &[ArgValue::None]);
    }

    #[test]
    fn test_sweep_poly_ignores_poly1d() {
        let probe = probe_for("sweep_poly").unwrap();
        let call = CallArgs::new()
            .arg(Backend::Cuda)
            .arg(ArgValue::Poly1d(vec![1.0, 0.0, 2.0]));
        let candidates = probe.candidates(&call).unwrap();
        assert_eq!(
            candidates.as_slice(),
            &[ArgValue::Array(Backend::Cuda), ArgValue::None]
        );
    }

    #[test]
    fn test_remez_falls_back_to_host_on_cuda() {
        let probe = probe_for("remez").unwrap();
        let call = CallArgs::new()
            .arg(128i64)
            .arg(Backend::Cuda)
            .arg(Backend::Cuda);
        // candidates point at CUDA, but the capability table denies it
        let backend = probe.resolve(&call, &HostResolver::new()).unwrap();
        assert_eq!(backend, Backend::Cpu);

        let permissive =
            HostResolver::with_capabilities(crate::capability::CapabilityMatrix::default());
        assert_eq!(probe.resolve(&call, &permissive).unwrap(), Backend::Cuda);
    }

    #[test]
    fn test_mixed_device_inputs_error() {
        let probe = probe_for("deconvolve").unwrap();
        let call = CallArgs::new().arg(Backend::Cuda).arg(Backend::Wgpu);
        let err = probe.resolve(&call, &HostResolver::new()).unwrap_err();
        assert_eq!(
            err,
            crate::error::DispatchError::MixedBackends {
                lhs: Backend::Cuda,
                rhs: Backend::Wgpu,
            }
        );
    }

    #[test]
    fn test_signature_fidelity_spot_checks() {
        let lfilter = probe_for("lfilter").unwrap();
        let names: Vec<_> = lfilter.params().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["b", "a", "x", "axis", "zi"]);
        assert_eq!(
            lfilter.params()[3].default,
            Some(DefaultValue::Int(-1))
        );

        let zoom = probe_for("zoom_fft").unwrap();
        let kw_only: Vec<_> = zoom
            .params()
            .iter()
            .filter(|p| p.kind == ParamKind::KeywordOnly)
            .map(|p| p.name)
            .collect();
        assert_eq!(kw_only, vec!["fs", "endpoint", "axis"]);

        let spectrogram = probe_for("spectrogram").unwrap();
        assert_eq!(
            spectrogram.params()[2].default,
            Some(DefaultValue::Tuple(&[
                DefaultValue::Str("tukey"),
                DefaultValue::Float(0.25),
            ]))
        );
    }

    #[test]
    fn test_positional_and_named_conventions_agree() {
        let probe = probe_for("sosfilt").unwrap();
        let positional = CallArgs::new().arg(Backend::Cuda).arg(Backend::Cuda);
        let named = CallArgs::new()
            .named("x", Backend::Cuda)
            .named("sos", Backend::Cuda);
        assert_eq!(
            probe.candidates(&positional).unwrap(),
            probe.candidates(&named).unwrap()
        );
    }
}
