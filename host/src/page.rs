// Page setup, run once by the host after its presentation layer is ready.
use chrono::{Datelike, Local, NaiveDate};

use crate::services::rut_input::RutInput;

// The parts of a page the helpers care about.
pub trait Page {
    // Activates tooltips on every trigger element; returns how many.
    fn activate_tooltips(&mut self) -> usize;

    // Fields marked as holding a RUT.
    fn rut_inputs(&mut self) -> &mut [RutInput];

    // Writes the year into the footer placeholder. Returns false when the
    // page has no such placeholder.
    fn set_footer_year(&mut self, year: i32) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageReport {
    pub tooltips: usize,
    pub rut_inputs: usize,
    pub footer_year: Option<i32>,
}

pub fn initialize<P: Page + ?Sized>(page: &mut P, today: NaiveDate) -> PageReport {
    let tooltips = page.activate_tooltips();

    let inputs = page.rut_inputs();
    for input in inputs.iter_mut() {
        input.auto_format = true;
    }
    let rut_inputs = inputs.len();

    let year = today.year();
    let footer_year = page.set_footer_year(year).then_some(year);

    let report = PageReport {
        tooltips,
        rut_inputs,
        footer_year,
    };
    tracing::debug!(?report, "Page initialized");
    report
}

pub fn initialize_now<P: Page + ?Sized>(page: &mut P) -> PageReport {
    initialize(page, Local::now().date_naive())
}
