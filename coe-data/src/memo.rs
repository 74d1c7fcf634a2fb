//! Memoization of derived chart options keyed on payload identity.

use serde_json::Value;
use std::rc::Rc;

/// Caches the option derived from the last payload `Rc` it saw.
///
/// Controllers only swap their payload `Rc` when a fetch is applied, so
/// pointer identity is exactly "the fetched data changed". Filter edits that
/// have not produced new data keep returning the same option `Rc`.
pub struct OptionMemo<T> {
    last: Option<(Rc<T>, Rc<Value>)>,
    derive: fn(&T) -> Value,
}

impl<T> OptionMemo<T> {
    pub fn new(derive: fn(&T) -> Value) -> Self {
        Self { last: None, derive }
    }

    /// Option for `input`, recomputed only when `input` is a different `Rc`.
    pub fn get(&mut self, input: &Rc<T>) -> Rc<Value> {
        if let Some((key, option)) = &self.last {
            if Rc::ptr_eq(key, input) {
                return Rc::clone(option);
            }
        }
        let option = Rc::new((self.derive)(input));
        self.last = Some((Rc::clone(input), Rc::clone(&option)));
        option
    }
}
