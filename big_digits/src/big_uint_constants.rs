pub const DIGITS: [char; 10] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9' ,
];

/// Base of a single stored digit.
pub const RADIX: u8 = 10;

/// Largest value served from `POS_CACHE`.
pub const MAX_CONSTANT: usize = 16;

/// Enough decimal digits for any `u64`.
pub const DIGITS_PER_U64: usize = 20;
