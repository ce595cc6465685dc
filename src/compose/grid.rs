//! Stacking and grid composition of tiles.
use crate::error::{Error, Result};
use crate::image::Image;

/// Stack two images vertically. Widths and channel counts must match.
pub fn vstack(top: &Image, bottom: &Image) -> Result<Image> {
    if top.width() != bottom.width() || top.channels() != bottom.channels() {
        return Err(Error::SizeMismatch {
            expected: top.width() * top.channels(),
            actual: bottom.width() * bottom.channels(),
        });
    }
    let mut data = Vec::with_capacity(top.data().len() + bottom.data().len());
    data.extend_from_slice(top.data());
    data.extend_from_slice(bottom.data());
    Image::from_vec(
        top.width(),
        top.height() + bottom.height(),
        top.channels(),
        data,
    )
}

/// Stack images horizontally. Heights and channel counts must match.
pub fn hstack(tiles: &[Image]) -> Result<Image> {
    let first = tiles.first().ok_or(Error::EmptyImage)?;
    let height = first.height();
    let channels = first.channels();
    for tile in tiles {
        if tile.height() != height || tile.channels() != channels {
            return Err(Error::SizeMismatch {
                expected: height * channels,
                actual: tile.height() * tile.channels(),
            });
        }
    }

    let total_width: usize = tiles.iter().map(Image::width).sum();
    let mut data = Vec::with_capacity(total_width * height * channels);
    for y in 0..height {
        for tile in tiles {
            data.extend_from_slice(tile.row(y));
        }
    }
    Image::from_vec(total_width, height, channels, data)
}

/// Arrange equally sized tiles into a grid with `cols` columns, filling
/// incomplete trailing rows with blank white tiles.
pub fn compose_grid(tiles: &[Image], cols: usize) -> Result<Image> {
    if cols == 0 {
        return Err(Error::invalid_parameter("cols", cols));
    }
    let first = tiles.first().ok_or(Error::EmptyImage)?;
    let (w, h, channels) = (first.width(), first.height(), first.channels());
    for tile in tiles {
        if tile.width() != w || tile.height() != h || tile.channels() != channels {
            return Err(Error::SizeMismatch {
                expected: w * h * channels,
                actual: tile.width() * tile.height() * tile.channels(),
            });
        }
    }

    let blank = Image::new_fill(w, h, channels, 255)?;
    let mut rows = Vec::new();
    for chunk in tiles.chunks(cols) {
        let mut row: Vec<Image> = chunk.to_vec();
        while row.len() < cols {
            row.push(blank.clone());
        }
        rows.push(hstack(&row)?);
    }

    let mut grid = rows[0].clone();
    for row in &rows[1..] {
        grid = vstack(&grid, row)?;
    }
    Ok(grid)
}
