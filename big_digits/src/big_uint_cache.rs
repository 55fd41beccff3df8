use lazy_static::*;

use crate::BigUint;
use crate::big_uint_constants::*;

lazy_static! {
    // digits are stored least significant first
    pub static ref POS_CACHE: [BigUint; MAX_CONSTANT + 1] = [
        BigUint::from_raw(vec![0]   ),
        BigUint::from_raw(vec![1]   ),
        BigUint::from_raw(vec![2]   ),
        BigUint::from_raw(vec![3]   ),
        BigUint::from_raw(vec![4]   ),
        BigUint::from_raw(vec![5]   ),
        BigUint::from_raw(vec![6]   ),
        BigUint::from_raw(vec![7]   ),
        BigUint::from_raw(vec![8]   ),
        BigUint::from_raw(vec![9]   ),
        BigUint::from_raw(vec![0, 1]),
        BigUint::from_raw(vec![1, 1]),
        BigUint::from_raw(vec![2, 1]),
        BigUint::from_raw(vec![3, 1]),
        BigUint::from_raw(vec![4, 1]),
        BigUint::from_raw(vec![5, 1]),
        BigUint::from_raw(vec![6, 1]),
    ];
}
