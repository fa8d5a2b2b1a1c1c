use crate::{PrepError, PrepResult};
use ndarray::{Array2, ArrayD, Axis, Ix2};

/// 从前往后移除长度为 1 的轴, 直到数组为二维.
///
/// 已经是二维的数组原样返回 (即使某一维长度为 1). 移除完所有单位轴后仍不是二维,
/// 或者一开始就低于二维时, 返回 [`PrepError::UnexpectedShape`].
pub fn squeeze_2d(record: &str, mut a: ArrayD<f64>) -> PrepResult<Array2<f64>> {
    let shape = a.shape().to_vec();
    let mut axis = 0;
    while a.ndim() > 2 && axis < a.ndim() {
        if a.len_of(Axis(axis)) == 1 {
            a = a.remove_axis(Axis(axis));
        } else {
            axis += 1;
        }
    }
    a.into_dimensionality::<Ix2>()
        .map_err(|_| PrepError::UnexpectedShape {
            record: record.to_string(),
            shape,
        })
}
