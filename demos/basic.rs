//! Standalone demo: opens a window with the ring picker.
//!
//! Run with `RUST_LOG=debug` to see confirm/cancel events.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_ring::{ring_picker, Argb, PickerEvent};

fn main() {
    env_logger::init();

    let color = RwSignal::new(Argb::from_hex("3B82F6").unwrap_or(Argb::BLUE));

    floem::Application::new()
        .window(
            move |_| {
                ring_picker(color, move |event| match event {
                    PickerEvent::Updated(picked) => log::trace!("picking {picked}"),
                    PickerEvent::Confirmed(picked) => {
                        log::info!("confirmed {picked}");
                        color.set(picked);
                    }
                    PickerEvent::Cancelled => log::info!("cancelled, keeping {}", color.get()),
                })
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((320.0, 320.0))
                    .title("floem-ring"),
            ),
        )
        .run();
}
