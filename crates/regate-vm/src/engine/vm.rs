//! Liveness evaluator for composed matchers.

use log::trace;
use regate_signals::Program;

use super::decoder::Utf8Decoder;
use super::error::RuntimeError;
use super::verify::verify;

/// Outcome of one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// One entry per pattern, in registration order.
    pub matches: Vec<bool>,
    /// Whether the input bytes were not well-formed UTF-8.
    pub utf8_error: bool,
}

impl MatchResult {
    /// Indices of the patterns that matched.
    pub fn matched(&self) -> impl Iterator<Item = usize> + '_ {
        self.matches
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| m.then_some(i))
    }
}

/// Builder for [`Vm`].
pub struct VmBuilder<'p> {
    program: &'p Program,
}

impl<'p> VmBuilder<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self { program }
    }

    /// Verify the program and prepare evaluation buffers.
    pub fn build(self) -> Result<Vm<'p>, RuntimeError> {
        let program = self.program;
        verify(program)?;

        let subranges = program.subranges();
        let mut taps = Vec::with_capacity(program.signals().len());
        for (i, signal) in program.signals().iter().enumerate() {
            let indices = signal
                .subranges()
                .iter()
                .map(|s| {
                    subranges.binary_search(s).map_err(|_| {
                        RuntimeError::InvalidProgram(format!(
                            "signal {i} uses subrange {s} missing from the global list"
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            taps.push(indices);
        }

        let live = program.initial_vector();
        Ok(Vm {
            program,
            next: vec![false; live.len()],
            live,
            signals: vec![false; taps.len()],
            subranges: vec![false; subranges.len()],
            taps,
            decoder: Utf8Decoder::new(),
            steps: 0,
        })
    }
}

/// Steps a [`Program`] one code point at a time.
///
/// All signal values are computed from the current code point before any
/// state is updated, and every state's next value reads only the previous
/// liveness vector.
pub struct Vm<'p> {
    program: &'p Program,
    live: Vec<bool>,
    next: Vec<bool>,
    signals: Vec<bool>,
    subranges: Vec<bool>,
    /// Per signal, indices into the global subrange list.
    taps: Vec<Vec<usize>>,
    decoder: Utf8Decoder,
    steps: u64,
}

impl<'p> Vm<'p> {
    pub fn builder(program: &'p Program) -> VmBuilder<'p> {
        VmBuilder::new(program)
    }

    pub fn program(&self) -> &'p Program {
        self.program
    }

    /// Consume one input byte.
    pub fn feed(&mut self, byte: u8) {
        if let Some(cp) = self.decoder.push(byte) {
            self.step(cp);
        }
    }

    pub fn feed_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.feed(byte);
        }
    }

    /// Consume one already-decoded code point.
    pub fn feed_code_point(&mut self, cp: u32) {
        self.step(cp);
    }

    /// End of string: report per-pattern matches and reset for the next one.
    pub fn finish(&mut self) -> MatchResult {
        let matches = self
            .program
            .patterns()
            .iter()
            .map(|p| p.accepting().iter().any(|&s| self.live[s as usize]))
            .collect();
        let utf8_error = self.decoder.finish();
        trace!("end of string after {} code points", self.steps);
        self.reset();
        MatchResult {
            matches,
            utf8_error,
        }
    }

    /// Evaluate a complete string given as bytes.
    pub fn run(&mut self, bytes: &[u8]) -> MatchResult {
        self.reset();
        self.feed_bytes(bytes);
        self.finish()
    }

    pub fn run_str(&mut self, text: &str) -> MatchResult {
        self.run(text.as_bytes())
    }

    /// Indices of currently live states.
    pub fn live_states(&self) -> Vec<u32> {
        self.live
            .iter()
            .enumerate()
            .filter_map(|(i, &l)| l.then_some(i as u32))
            .collect()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn reset(&mut self) {
        self.live = self.program.initial_vector();
        self.decoder = Utf8Decoder::new();
        self.steps = 0;
    }

    fn step(&mut self, cp: u32) {
        for (bit, s) in self.subranges.iter_mut().zip(self.program.subranges()) {
            *bit = s.contains(cp);
        }
        for (value, taps) in self.signals.iter_mut().zip(&self.taps) {
            *value = taps.iter().any(|&t| self.subranges[t]);
        }

        for (next, state) in self.next.iter_mut().zip(self.program.states()) {
            *next = state
                .incoming()
                .iter()
                .any(|t| self.live[t.source as usize] && t.condition.eval(&self.signals));
        }
        std::mem::swap(&mut self.live, &mut self.next);
        self.steps += 1;

        trace!("step {} cp={cp:#x} live={:?}", self.steps, self.live_states());
    }
}
