//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use portfolio_particles::{App, PageKind, init_logging};

fn main() {
	init_logging();

	let page = PageKind::from_document();
	log::info!("portfolio: page `{}`", page.tag());

	mount_to_body(move || {
		view! { <App page=page /> }
	})
}
