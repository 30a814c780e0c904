//! Running parsed requests.
//!
//! A term is lowered to values and evaluated factor by factor. A compound
//! definition is validated as a whole and installed only if every name is
//! new, so a failing request never leaves half its words behind.

use joy_parse::{CompoundDefinition, Cycle, Factor, Request, SetMember, Term};
use joy_value::{conversion_error, duplicate_definition, EvalResult, SetValue, Value};
use rustc_hash::FxHashSet;
use tracing::debug;

use super::Interpreter;
use crate::dictionary::Entry;

impl Interpreter {
    /// Runs every request in order, stopping at the first error.
    pub fn run(&mut self, cycle: &Cycle) -> EvalResult<()> {
        for request in &cycle.requests {
            self.run_request(request)?;
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run_request(&mut self, request: &Request) -> EvalResult<()> {
        match request {
            Request::Definition(definition) => self.define_compound(definition),
            Request::Term(term) => self.run_term(term),
        }
    }

    /// Evaluates `term`, leaving its results on the stack.
    pub fn run_term(&mut self, term: &Term) -> EvalResult<()> {
        for value in lower_term(term)? {
            self.eval_instruction(&value)?;
        }
        Ok(())
    }

    fn define_compound(&mut self, definition: &CompoundDefinition) -> EvalResult<()> {
        let mut seen = FxHashSet::default();
        let mut bodies = Vec::new();
        for simple in definition.definitions() {
            let name = simple.name.as_str();
            if self.dictionary.contains(name) || !seen.insert(name) {
                return Err(duplicate_definition(name));
            }
            bodies.push((name, Value::quotation(lower_term(&simple.body)?)));
        }
        for (name, body) in bodies {
            debug!(word = name, len = body.len(), "define");
            self.dictionary.define(name, Entry::Compound(body))?;
        }
        if let Some(module) = &definition.module {
            debug!(module = module.as_str(), "module installed");
        }
        Ok(())
    }
}

/// Converts parsed factors into runtime values.
pub fn lower_term(term: &Term) -> EvalResult<Vec<Value>> {
    term.factors.iter().map(lower_factor).collect()
}

fn lower_factor(factor: &Factor) -> EvalResult<Value> {
    Ok(match factor {
        Factor::Integer(n) => Value::Integer(*n),
        Factor::Float(x) => Value::Float(*x),
        Factor::Char(c) => Value::Char(*c),
        Factor::String(text) => Value::string(text.as_str()),
        Factor::Bool(b) => Value::Bool(*b),
        Factor::Symbol(name) => Value::symbol(name.as_str()),
        Factor::Quotation(term) => Value::list(lower_term(term)?),
        Factor::Set(members) => Value::Set(lower_set(members)?),
    })
}

fn lower_set(members: &[SetMember]) -> EvalResult<SetValue> {
    let mut set = SetValue::EMPTY;
    for member in members {
        let (ordinal, literal) = match *member {
            SetMember::Integer(n) => (n, Value::Integer(n)),
            SetMember::Char(c) => (i64::from(u32::from(c)), Value::Char(c)),
        };
        set = set
            .insert(ordinal)
            .ok_or_else(|| conversion_error(&literal, "set member"))?;
    }
    Ok(set)
}
