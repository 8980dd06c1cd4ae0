use std::{cell::RefCell, rc::Rc};

use proof_panel::{
    options::PanelOptions,
    panel::{ActionEvent, GoalBlock, PaneId, Panel, ToolbarButton, Trigger},
};

fn panel() -> Panel {
    Panel::new(PanelOptions::new("ide-wrapper").with_base_path("/jscoq"))
}

#[test]
fn test_toggle_twice_restores_visibility() {
    let mut panel = panel();
    assert!(!panel.toggled());
    panel.toggle();
    assert!(panel.toggled());
    panel.toggle();
    assert!(!panel.toggled());

    panel.hide();
    panel.hide();
    assert!(panel.toggled());
    panel.show();
    assert!(!panel.toggled());
}

#[test]
fn test_collapse_stops_at_last_open_pane() {
    let mut panel = panel();
    // Packages starts collapsed; open it so all three are expanded.
    assert!(panel.on_pane_caption_click(PaneId::Packages));

    assert!(panel.on_pane_caption_click(PaneId::Goal));
    assert!(panel.on_pane_caption_click(PaneId::Message));
    assert!(!panel.on_pane_caption_click(PaneId::Packages));

    assert!(panel.panes().is_collapsed(PaneId::Goal));
    assert!(panel.panes().is_collapsed(PaneId::Message));
    assert!(!panel.panes().is_collapsed(PaneId::Packages));

    // Repeated attempts at the boundary change nothing.
    let before = *panel.panes();
    assert!(!panel.on_pane_caption_click(PaneId::Packages));
    assert_eq!(*panel.panes(), before);
}

#[test]
fn test_render_goals_replaces_and_notify_appends() {
    let mut panel = panel();
    panel.notify_system("Loading the prelude");
    panel.notify_system("Prelude loaded");
    assert_eq!(panel.goals().blocks().len(), 2);

    panel.render_goals("1 subgoal\n⊢ True");
    assert_eq!(
        panel.goals().blocks(),
        &[GoalBlock::Markup("1 subgoal\n⊢ True".to_string())]
    );

    panel.notify_system("Worker reset");
    assert_eq!(
        panel.goals().blocks().last(),
        Some(&GoalBlock::System("Worker reset".to_string()))
    );
}

#[test]
fn test_action_handler_receives_originating_event() {
    let mut panel = panel();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    panel.set_action_handler(move |event| sink.borrow_mut().push(*event));

    let event = ActionEvent {
        button: ToolbarButton::Down,
        trigger: Trigger::Mouse { column: 4, row: 1 },
    };

    panel.toolbar_off();
    assert!(!panel.press_button(&event));
    assert!(panel.on_hold());

    panel.toolbar_on();
    assert!(panel.press_button(&event));
    assert_eq!(*seen.borrow(), vec![event]);
}
