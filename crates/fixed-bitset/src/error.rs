use snafu::Snafu;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("bit index {} is out of range for a set of {} bits", index, capacity))]
    OutOfRange { index: usize, capacity: usize },
}

pub type Result<T, E = Error> = ::core::result::Result<T, E>;
