use leptos::prelude::*;
use pia_widgets::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App)
}
