mod common;

use std::rc::Rc;

use common::{Harness, RecordingViews, Rendered};
use futures::executor::block_on;
use stock_board_wasm::application::{Action, ErrorPresenter};

fn presenter() -> (Rc<RecordingViews>, ErrorPresenter) {
    let views = Rc::new(RecordingViews::default());
    let presenter = ErrorPresenter::new(views.clone());
    (views, presenter)
}

#[test]
fn a_new_message_replaces_the_visible_one() {
    let (views, presenter) = presenter();

    presenter.show("first");
    presenter.show("second");

    assert_eq!(presenter.current_message().as_deref(), Some("second"));
    assert_eq!(views.errors_shown(), vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn close_hides_the_modal() {
    let (views, presenter) = presenter();
    presenter.show("boom");

    presenter.dismiss();

    assert!(!presenter.is_visible());
    assert_eq!(views.events().last(), Some(&Rendered::ErrorHidden));
}

#[test]
fn only_backdrop_clicks_dismiss() {
    let (_, presenter) = presenter();
    presenter.show("boom");

    presenter.handle_backdrop_click(true);
    assert!(presenter.is_visible());

    presenter.handle_backdrop_click(false);
    assert!(!presenter.is_visible());
}

#[test]
fn modal_actions_route_through_the_app() {
    let harness = Harness::new();
    block_on(harness.app.dispatch(Action::Search(" ".to_string()))).unwrap_err();
    assert!(harness.app.errors().is_visible());

    block_on(harness.app.dispatch(Action::BackdropClick { inside_modal: true })).unwrap();
    assert!(harness.app.errors().is_visible());

    block_on(harness.app.dispatch(Action::CloseError)).unwrap();
    assert!(!harness.app.errors().is_visible());
}
