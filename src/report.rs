use std::fmt;

use crate::data::{DataItem, LOGIC_FUNCTION_NAMES};
use crate::network::network::Network;

/// Console report for a trained logic-function network.
///
/// Header with the iteration count, a column header naming the six
/// functions, one row per item (`i,j = ` then each prediction at three
/// decimals), then the parameter dump.
pub struct Report<'a> {
    pub network: &'a Network,
    pub data: &'a [DataItem],
    pub iterations: usize,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Result after {} iterations", self.iterations)?;
        write!(f, "      ")?;
        for (k, name) in LOGIC_FUNCTION_NAMES.iter().enumerate() {
            let sep = if k == 0 { "" } else { " " };
            write!(f, "{}{:>5}", sep, name)?;
        }
        writeln!(f)?;

        for item in self.data {
            let inputs: Vec<String> = item.input().iter().map(|x| format!("{:.0}", x)).collect();
            write!(f, "{} =", inputs.join(","))?;
            for y in self.network.predict(item.input()) {
                write!(f, " {:>5.3}", y)?;
            }
            writeln!(f)?;
        }

        write!(f, "{}", self.network)
    }
}

pub fn format_report(network: &Network, data: &[DataItem], iterations: usize) -> String {
    Report { network, data, iterations }.to_string()
}
