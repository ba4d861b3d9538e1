pub mod cs;

pub use cs::ecc::golay::{
    alternate_transform, forward_transform, golay_decode, golay_encode, is_codeword,
    locate_errors, syndrome, weight12, Correction, ErrorPattern, GeneratorMatrix, GolayCode,
    GolayCodeBuilder, InputPolicy, ALTERNATE_MATRIX, CODEWORD_BITS, CODEWORD_MASK, DATA_BITS,
    DATA_MASK, FORWARD_MATRIX, MAX_CORRECTABLE_ERRORS, PARITY_BITS,
};
pub use cs::error::{Error, Result};
