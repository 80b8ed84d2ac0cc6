use std::time::Duration;

use egui::{
    Context, Event, FullOutput, Modifiers, PointerButton, Pos2, Rect, Response, Sense, Ui, Vec2,
    ViewportId, ViewportInfo,
};

use super::{
    DragPhase, IntentReceiver, ItemId, ItemVisual, MoveDirection, ReorderController,
    ReorderGesture, ReorderIntent, ReorderOptions, intent_channel,
};
use crate::ReorderableList;

const ROW_HEIGHT: f32 = 76.0;
const ROW_SPACING: f32 = 12.0;

/// Frame interval. A power of two keeps every frame time exact.
const FRAME: f64 = 1.0 / 64.0;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Laid-out rect of the row at `index`, with default spacing.
fn row_rect(index: usize) -> Rect {
    Rect::from_min_size(
        Pos2::new(0.0, index as f32 * (ROW_HEIGHT + ROW_SPACING)),
        Vec2::new(300.0, ROW_HEIGHT),
    )
}

fn press(pos: Pos2) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: true,
        modifiers: Modifiers::NONE,
    }
}

fn release(pos: Pos2) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: false,
        modifiers: Modifiers::NONE,
    }
}

/// Drives an egui context one pass at a time with a fixed frame interval.
struct Frames {
    ctx: Context,
    time: f64,
}

impl Frames {
    fn new() -> Self {
        Self {
            ctx: Context::default(),
            time: 0.0,
        }
    }

    /// Runs one pass with `events`; `rows` draws the rows and receives the pass time.
    fn pass(&mut self, events: Vec<Event>, rows: impl FnOnce(&mut Ui, f64)) -> FullOutput {
        self.time += FRAME;
        let screen = Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 600.0));

        let mut viewports: egui::ViewportIdMap<ViewportInfo> = Default::default();
        viewports.insert(
            ViewportId::ROOT,
            ViewportInfo {
                inner_rect: Some(screen),
                outer_rect: Some(screen),
                ..Default::default()
            },
        );

        let raw = egui::RawInput {
            viewports,
            screen_rect: Some(screen),
            time: Some(self.time),
            events,
            ..Default::default()
        };

        self.ctx.begin_pass(raw);
        let time = self.time;
        egui::CentralPanel::default().show(&self.ctx, |ui| rows(ui, time));
        self.ctx.end_pass()
    }
}

fn repaint_delay(output: &FullOutput) -> Option<Duration> {
    output
        .viewport_output
        .get(&ViewportId::ROOT)
        .map(|viewport| viewport.repaint_delay)
}

fn draw_row(ui: &mut Ui, gesture: &mut ReorderGesture, index: usize, time: f64) -> Response {
    let response = ui.interact(row_rect(index), gesture.item(), Sense::drag());
    gesture.interact(&response, response.rect.height(), time);
    response
}

/// A gesture for the middle row of three, plus a pointer resting on that row.
fn middle_row(options: ReorderOptions) -> (ReorderGesture, IntentReceiver, Pos2) {
    init_logging();
    let (tx, rx) = intent_channel();
    let gesture = ReorderGesture::new(ItemId::new("bench"), 1, 3, tx, options);
    (gesture, rx, Pos2::new(100.0, 120.0))
}

#[test]
fn press_drag_release_reports_start_moves_end() {
    let (mut gesture, rx, mut pointer) = middle_row(ReorderOptions::default());
    let item = gesture.item();
    let mut frames = Frames::new();

    frames.pass(vec![Event::PointerMoved(pointer)], |ui, t| {
        draw_row(ui, &mut gesture, 1, t);
    });
    assert_eq!(gesture.phase(), DragPhase::Idle);

    frames.pass(vec![press(pointer)], |ui, t| {
        let response = draw_row(ui, &mut gesture, 1, t);
        assert!(response.drag_started());
    });
    assert!(gesture.is_dragging());

    // 20 points per frame; the swap fires at 40 (threshold 0.45 * 88 = 39.6).
    for _ in 0..4 {
        pointer.y += 20.0;
        frames.pass(vec![Event::PointerMoved(pointer)], |ui, t| {
            draw_row(ui, &mut gesture, 1, t);
        });
    }
    let session = gesture.session().snapshot();
    assert_eq!(session.row_extent, ROW_HEIGHT + ROW_SPACING);
    assert_eq!(session.index, 2);
    assert_eq!(session.visual_offset_y, 80.0 - 88.0);

    frames.pass(vec![release(pointer)], |ui, t| {
        let response = draw_row(ui, &mut gesture, 1, t);
        assert!(response.drag_stopped());
    });
    assert_eq!(gesture.phase(), DragPhase::Settling);

    assert_eq!(
        rx.drain(),
        [
            ReorderIntent::DragStateChanged { item, active: true },
            ReorderIntent::MoveByOffset {
                item,
                direction: MoveDirection::Down,
            },
            ReorderIntent::DragStateChanged {
                item,
                active: false,
            },
        ]
    );
}

#[test]
fn release_while_row_is_hidden_cancels_on_next_interact() {
    let (mut gesture, rx, mut pointer) = middle_row(ReorderOptions::default());
    let item = gesture.item();
    let mut frames = Frames::new();

    frames.pass(vec![Event::PointerMoved(pointer)], |ui, t| {
        draw_row(ui, &mut gesture, 1, t);
    });
    frames.pass(vec![press(pointer)], |ui, t| {
        draw_row(ui, &mut gesture, 1, t);
    });
    pointer.y += 20.0;
    frames.pass(vec![Event::PointerMoved(pointer)], |ui, t| {
        draw_row(ui, &mut gesture, 1, t);
    });

    // The row is not drawn in the frame the button goes up, so it never sees `drag_stopped`.
    frames.pass(vec![release(pointer)], |_, _| {});
    assert!(gesture.is_dragging());

    frames.pass(Vec::new(), |ui, t| {
        let response = draw_row(ui, &mut gesture, 1, t);
        assert!(!response.dragged());
        assert!(!response.drag_stopped());
    });
    assert_eq!(gesture.phase(), DragPhase::Settling);
    assert_eq!(
        rx.drain(),
        [
            ReorderIntent::DragStateChanged { item, active: true },
            ReorderIntent::DragStateChanged {
                item,
                active: false,
            },
        ]
    );
}

#[test]
fn settling_row_keeps_requesting_repaints() {
    let options = ReorderOptions {
        settle_duration: 0.25,
        ..Default::default()
    };
    let (mut gesture, _rx, mut pointer) = middle_row(options);
    let mut frames = Frames::new();

    frames.pass(vec![Event::PointerMoved(pointer)], |ui, t| {
        draw_row(ui, &mut gesture, 1, t);
    });
    frames.pass(vec![press(pointer)], |ui, t| {
        draw_row(ui, &mut gesture, 1, t);
    });
    pointer.y += 20.0;
    frames.pass(vec![Event::PointerMoved(pointer)], |ui, t| {
        draw_row(ui, &mut gesture, 1, t);
    });
    frames.pass(vec![release(pointer)], |ui, t| {
        draw_row(ui, &mut gesture, 1, t);
    });
    assert_eq!(gesture.phase(), DragPhase::Settling);

    // No input from here on: only the settle animation asks for frames.
    let mut settling_frames = 0;
    for _ in 0..64 {
        let output = frames.pass(Vec::new(), |ui, t| {
            draw_row(ui, &mut gesture, 1, t);
        });
        if gesture.phase() != DragPhase::Settling {
            break;
        }
        settling_frames += 1;
        assert_eq!(
            repaint_delay(&output),
            Some(Duration::ZERO),
            "settling frame {settling_frames}"
        );
    }

    assert_eq!(gesture.phase(), DragPhase::Idle);
    assert!(settling_frames >= 10, "settled after {settling_frames} frames");
    assert_eq!(gesture.visual_at(frames.time), ItemVisual::REST);
}

/// One frame of a list drawn through a controller: sync, draw every row, apply the intents.
fn list_frame(
    frames: &mut Frames,
    controller: &mut ReorderController,
    list: &mut ReorderableList<&'static str>,
    events: Vec<Event>,
) {
    controller.sync(&list.ids());
    frames.pass(events, |ui, t| {
        for (index, (id, _)) in list.iter().enumerate() {
            let response = ui.interact(row_rect(index), id, Sense::drag());
            controller.interact(id, &response, response.rect.height(), t);
        }
    });
    controller.dispatch(list);
}

#[test]
fn controller_moves_the_dragged_row_in_the_list() {
    init_logging();
    let mut list = ReorderableList::new();
    for name in ["squat", "bench", "row"] {
        list.push(ItemId::new(name), name);
    }
    let mut controller = ReorderController::default();
    let mut frames = Frames::new();
    let mut pointer = Pos2::new(100.0, 120.0);

    list_frame(
        &mut frames,
        &mut controller,
        &mut list,
        vec![Event::PointerMoved(pointer)],
    );
    list_frame(&mut frames, &mut controller, &mut list, vec![press(pointer)]);
    assert!(controller.is_dragging());
    assert!(list.is_reordering());
    assert!(!list.can_open_editor());

    for _ in 0..3 {
        pointer.y += 20.0;
        list_frame(
            &mut frames,
            &mut controller,
            &mut list,
            vec![Event::PointerMoved(pointer)],
        );
    }
    let order: Vec<&str> = list.iter().map(|(_, name)| *name).collect();
    assert_eq!(order, ["squat", "row", "bench"]);
    assert!(list.is_reordering());

    list_frame(&mut frames, &mut controller, &mut list, vec![release(pointer)]);
    assert!(!controller.is_dragging());
    assert!(list.can_open_editor());
    assert_eq!(list.index_of(ItemId::new("bench")), Some(2));
}
