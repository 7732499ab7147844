//! 문자열 정규화 및 한글 유니코드 처리

pub mod normalize;
pub mod unicode;
