//! Run code inside a Dioxus scope so signals have an owner.

use std::any::Any;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use dioxus::prelude::*;

type Panic = Box<dyn Any + Send>;

#[derive(Clone)]
struct Body {
    run: Rc<dyn Fn()>,
    panic: Rc<RefCell<Option<Panic>>>,
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.run, &other.run)
    }
}

fn run_body(body: Body) -> Element {
    use_hook(|| {
        // Carry assertion failures out of the render
        if let Err(panic) = panic::catch_unwind(AssertUnwindSafe(|| (body.run)())) {
            *body.panic.borrow_mut() = Some(panic);
        }
    });
    rsx! {}
}

/// Run `body` once while rendering a root component.
///
/// Signals created in `body` stay alive as long as the returned dom.
pub fn in_scope(body: impl Fn() + 'static) -> VirtualDom {
    let panic = Rc::new(RefCell::new(None));
    let mut dom = VirtualDom::new_with_props(
        run_body,
        Body {
            run: Rc::new(body),
            panic: panic.clone(),
        },
    );
    dom.rebuild_in_place();

    if let Some(panic) = panic.borrow_mut().take() {
        panic::resume_unwind(panic);
    }
    dom
}
