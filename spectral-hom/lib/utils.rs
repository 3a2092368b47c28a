//! Small conveniences for writing output.

/// Create a complex number from a real part or, with a leading `i`, an
/// imaginary part.
///
/// ```
/// use spectral_hom::c;
/// assert_eq!(c!(2.0).re, 2.0);
/// assert_eq!(c!(i 3.0).im, 3.0);
/// ```
#[macro_export]
macro_rules! c {
    ( i $im:expr ) => {
        $crate::num_complex::Complex64::new(0.0, $im)
    };
    ( $re:expr ) => {
        $crate::num_complex::Complex64::new($re, 0.0)
    };
}

/// Create a directory and all its parents if they don't already exist,
/// returning a [`std::io::Result`].
#[macro_export]
macro_rules! mkdir {
    ( $dir:expr ) => {
        std::fs::create_dir_all(&$dir)
    };
}

/// Write a set of named arrays to a single `.npz` archive, returning a
/// [`HomResult`][crate::error::HomResult].
///
/// ```ignore
/// write_npz!(
///     outdir.join("data.npz"),
///     arrays: {
///         "time" => &time,
///         "amp" => &amp,
///     }
/// )?;
/// ```
#[macro_export]
macro_rules! write_npz {
    (
        $filename:expr,
        arrays: { $( $key:expr => $val:expr ),* $(,)? }
    ) => {
        (|| -> $crate::error::HomResult<()> {
            let mut npz
                = $crate::ndarray_npy::NpzWriter::new(
                    std::fs::File::create($filename)?
                );
            $(
                npz.add_array($key, $val)?;
            )*
            npz.finish()?;
            Ok(())
        })()
    };
}
