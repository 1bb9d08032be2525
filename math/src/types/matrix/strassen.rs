use std::ops::{Add, Mul, Sub};


/// One step of Strassen's seven-product recurrence.
///
/// Operands are 2x2 block matrices given as `[b11, b12, b21, b22]`. The block
/// type may itself be a matrix, in which case its own `Mul` recurses.
#[inline]
pub(super) fn strassen<B>(a: [B; 4], b: [B; 4]) -> [B; 4]
where
    B: Copy + Add<Output = B> + Sub<Output = B> + Mul<Output = B>,
{
    let [a11, a12, a21, a22] = a;
    let [b11, b12, b21, b22] = b;

    let m1 = (a11 + a22) * (b11 + b22);
    let m2 = (a21 + a22) * b11;
    let m3 = a11 * (b12 - b22);
    let m4 = a22 * (b21 - b11);
    let m5 = (a11 + a12) * b22;
    let m6 = (a21 - a11) * (b11 + b12);
    let m7 = (a12 - a22) * (b21 + b22);

    [
        m1 + m4 - m5 + m7,
        m3 + m5,
        m2 + m4,
        m1 - m2 + m3 + m6,
    ]
}
