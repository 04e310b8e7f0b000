//! Multi-pattern composition.
//!
//! Each pattern is parsed, built, stripped of epsilon edges and minimized on
//! its own. Its states are then appended to one shared state list with
//! fresh global indices, and every transition charset is interned into the
//! shared [`RangeTable`]. Patterns never share states, so adding one never
//! changes what another matches.

use std::time::Instant;

use log::{debug, info};
use regate_signals::{Pattern, PatternId, Program, StateSig};

use crate::encode::RangeTable;
use crate::nfae::{Nfae, StateId};
use crate::parser::{DEFAULT_RECURSION_LIMIT, Parser};
use crate::{Error, Result};

/// Builder for [`Matcher`].
#[derive(Debug, Clone)]
pub struct MatcherBuilder {
    name: String,
    minimize: bool,
    prune_degenerate: bool,
    state_limit: Option<usize>,
    recursion_limit: u32,
}

impl MatcherBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            minimize: true,
            prune_degenerate: true,
            state_limit: None,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Run the forward/backward collapse after epsilon elimination.
    pub fn minimize(mut self, value: bool) -> Self {
        self.minimize = value;
        self
    }

    /// Drop isolated accepting initial states after minimization.
    pub fn prune_degenerate(mut self, value: bool) -> Self {
        self.prune_degenerate = value;
        self
    }

    /// Fail with [`Error::StateLimitExceeded`] when a pattern's automaton, or
    /// the composed state list, grows past `limit` states.
    ///
    /// Unlimited by default. Pathological nesting of alternations and
    /// concatenations can blow up the state count, and collapsing does not
    /// bound it.
    pub fn state_limit(mut self, limit: Option<usize>) -> Self {
        self.state_limit = limit;
        self
    }

    /// Maximum group nesting depth accepted by the parser.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn build(self) -> Matcher {
        Matcher {
            config: self,
            states: Vec::new(),
            patterns: Vec::new(),
            table: RangeTable::new(),
        }
    }
}

/// Composed automaton for a set of patterns.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatcherBuilder,
    states: Vec<StateSig>,
    patterns: Vec<Pattern>,
    table: RangeTable,
}

impl Matcher {
    pub fn builder(name: impl Into<String>) -> MatcherBuilder {
        MatcherBuilder::new(name)
    }

    /// Matcher with default settings.
    pub fn new(name: impl Into<String>) -> Self {
        MatcherBuilder::new(name).build()
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Compile `pattern` and add it to the matcher.
    ///
    /// On error the matcher is left exactly as it was.
    pub fn append_re(&mut self, pattern: &str) -> Result<PatternId> {
        let automaton = self.reduce(pattern)?;
        let reversed = automaton.reverse();
        self.check_limit(self.states.len() + reversed.len())?;

        let offset = self.states.len() as u32;
        for index in 0..reversed.len() as u32 {
            let id = StateId::new(index);
            let mut state = StateSig::new(offset + index, reversed.is_final(id));
            for (source, charset) in reversed.state(id).real() {
                state.push_incoming(offset + source.get(), self.table.intern(charset));
            }
            self.states.push(state);
        }

        let accepting = reversed
            .initial()
            .iter()
            .map(|id| offset + id.get())
            .collect();
        self.patterns.push(Pattern::new(pattern, accepting));

        debug!(
            "pattern {}: {} states from offset {}, {} signals in table",
            self.patterns.len() - 1,
            reversed.len(),
            offset,
            self.table.len()
        );
        Ok(self.patterns.len() - 1)
    }

    /// Parse and reduce one pattern without touching the matcher.
    fn reduce(&self, pattern: &str) -> Result<Nfae> {
        let ast = Parser::new(pattern)
            .with_recursion_limit(self.config.recursion_limit)
            .parse()?;

        let nfae = Nfae::from_ast(&ast);
        debug!("{pattern:?}: {} states after construction", nfae.len());
        self.check_limit(nfae.len())?;

        let mut nfae = nfae.strip_epsilon();
        debug!("{pattern:?}: {} states after epsilon elimination", nfae.len());
        self.check_limit(nfae.len())?;

        if self.config.minimize {
            nfae.minimize();
            debug!("{pattern:?}: {} states after minimization", nfae.len());
        }
        if self.config.prune_degenerate && nfae.prune_degenerate() {
            debug!("{pattern:?}: {} states after pruning", nfae.len());
        }
        Ok(nfae)
    }

    fn check_limit(&self, states: usize) -> Result<()> {
        match self.config.state_limit {
            Some(limit) if states > limit => Err(Error::StateLimitExceeded { limit, states }),
            _ => Ok(()),
        }
    }

    #[inline]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    #[inline]
    pub fn states(&self) -> &[StateSig] {
        &self.states
    }

    /// Number of distinct range signals registered so far.
    pub fn signal_count(&self) -> usize {
        self.table.len()
    }

    /// Snapshot of the composed tables.
    pub fn program(&self) -> Program {
        Program::new(
            self.config.name.clone(),
            self.states.clone(),
            self.patterns.clone(),
            self.table.signals(),
        )
    }
}

/// Compile a set of patterns into one program.
///
/// Errors name the index of the failing pattern.
pub fn compile(name: &str, patterns: &[&str]) -> Result<Program> {
    let start = Instant::now();
    let mut matcher = Matcher::new(name);
    for (index, pattern) in patterns.iter().enumerate() {
        matcher
            .append_re(pattern)
            .map_err(|source| Error::Pattern {
                index,
                source: Box::new(source),
            })?;
    }

    let program = matcher.program();
    info!("Compile time: {:?}", Instant::elapsed(&start));
    info!("Number of patterns: {}", program.patterns().len());
    info!("Number of states: {}", program.states().len());
    info!("Number of signals: {}", program.signals().len());
    Ok(program)
}
