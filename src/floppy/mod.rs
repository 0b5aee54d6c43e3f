//! The NKC floppy disk layout and blank disk images.

use crate::media::Image;

//===========================================================================//

/// The value a format operation leaves in unused floppy sectors.
pub const FILL_BYTE: u8 = 0xe5;

/// The file name that NKC emulators expect for a floppy disk image.
pub const IMAGE_FILE_NAME: &str = "floppy.img";

//===========================================================================//

/// The physical layout of a floppy disk, as seen by the NKC floppy
/// controller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Geometry {
    /// The number of tracks per side.
    pub tracks: usize,
    /// The number of disk sides.
    pub sides: usize,
    /// The number of sectors per track side.
    pub sectors: usize,
    /// The number of bytes per sector.
    pub sector_size: usize,
}

impl Geometry {
    /// The 800kB double-sided layout used by NKC disk drives: 80 tracks of 2
    /// sides with 5 sectors of 1024 bytes each.
    pub const NKC_800K: Geometry =
        Geometry { tracks: 80, sides: 2, sectors: 5, sector_size: 1024 };

    /// Returns the total capacity of a disk with this geometry, in bytes.
    pub fn total_bytes(&self) -> usize {
        self.tracks * self.sides * self.sectors * self.sector_size
    }

    /// Returns the byte offset of the given sector within a disk image, or
    /// `None` if the coordinates fall outside this geometry.  Tracks and
    /// sides are numbered from 0, but sectors are numbered from 1, matching
    /// the controller's sector register.
    pub fn sector_offset(
        &self,
        track: usize,
        side: usize,
        sector: usize,
    ) -> Option<usize> {
        if track >= self.tracks || side >= self.sides {
            return None;
        }
        if sector < 1 || sector > self.sectors {
            return None;
        }
        let index = track * self.sectors * self.sides
            + self.sectors * side
            + (sector - 1);
        Some(index * self.sector_size)
    }
}

//===========================================================================//

/// Returns a blank 800kB floppy disk image, every byte equal to
/// [`FILL_BYTE`].
pub fn blank_image() -> Image {
    Image::filled(Geometry::NKC_800K.total_bytes(), FILL_BYTE)
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{FILL_BYTE, Geometry, blank_image};

    #[test]
    fn nkc_disk_capacity() {
        assert_eq!(Geometry::NKC_800K.total_bytes(), 800 * 1024);
    }

    #[test]
    fn sector_offsets_follow_controller_layout() {
        let geometry = Geometry::NKC_800K;
        assert_eq!(geometry.sector_offset(0, 0, 1), Some(0));
        assert_eq!(geometry.sector_offset(0, 0, 2), Some(1024));
        assert_eq!(geometry.sector_offset(0, 0, 5), Some(4 * 1024));
        // Side 1 of a track follows side 0.
        assert_eq!(geometry.sector_offset(0, 1, 1), Some(5 * 1024));
        assert_eq!(geometry.sector_offset(1, 0, 1), Some(10 * 1024));
        // The last sector ends exactly at the end of the image.
        assert_eq!(
            geometry.sector_offset(79, 1, 5),
            Some(geometry.total_bytes() - 1024)
        );
    }

    #[test]
    fn sector_offset_rejects_out_of_range_coordinates() {
        let geometry = Geometry::NKC_800K;
        assert_eq!(geometry.sector_offset(0, 0, 0), None);
        assert_eq!(geometry.sector_offset(0, 0, 6), None);
        assert_eq!(geometry.sector_offset(80, 0, 1), None);
        assert_eq!(geometry.sector_offset(0, 2, 1), None);
    }

    #[test]
    fn blank_image_is_filled_with_format_byte() {
        let image = blank_image();
        assert_eq!(image.len(), 800 * 1024);
        assert!(image.as_bytes().iter().all(|&byte| byte == FILL_BYTE));
    }
}

//===========================================================================//
