use yew::prelude::*;

use crate::state::{Debouncer, TimeoutScheduler};

/// `value`, but only once it has stopped changing for `delay_ms`
#[hook]
pub fn use_debounce<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let debounced = use_state_eq(|| value.clone());
    let debouncer = use_mut_ref(|| Debouncer::new(TimeoutScheduler, delay_ms));

    {
        let debounced = debounced.clone();
        use_effect_with((value, delay_ms), move |(value, delay_ms)| {
            let value = value.clone();
            let mut debouncer = debouncer.borrow_mut();
            debouncer.set_delay_ms(*delay_ms);
            debouncer.push(move || debounced.set(value));
            || ()
        });
    }

    (*debounced).clone()
}
