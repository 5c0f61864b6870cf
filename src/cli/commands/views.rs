//! Views command - list the browser tabs and their routes.

use crate::utils::dim;
use crate::view::View;

pub fn run_views() {
    let width = View::ALL.iter().map(|v| v.label().len()).max().unwrap_or(0);
    for view in View::ALL {
        println!("{:<width$}  {}", view.label(), dim(&view.route()), width = width);
    }
}
