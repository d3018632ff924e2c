use std::ops::Div;

quantity!(Cost, suffix: "₹", precision: 2);

impl Div<Self> for Cost {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}
