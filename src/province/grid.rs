// src/province/grid.rs
//! Двумерные сетки: булевы маски и карта идентификаторов провинций.
//!
//! Обе структуры хранят данные построчно, индекс пикселя — `y * width + x`.

/// Значение карты для пикселя, ещё не отнесённого ни к одной провинции
pub const UNASSIGNED: i32 = -1;

/// Булева маска размером `width × height`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    pub width: u32,
    pub height: u32,
    pub data: Vec<bool>,
}

impl Mask {
    /// Маска, заполненная одним значением
    #[must_use]
    pub fn filled(width: u32, height: u32, value: bool) -> Self {
        Self {
            width,
            height,
            data: vec![value; (width as usize) * (height as usize)],
        }
    }

    #[must_use]
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> bool) -> Self {
        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    #[must_use]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[must_use]
    pub fn any(&self) -> bool {
        self.data.iter().any(|&v| v)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    #[must_use]
    pub fn inverted(&self) -> Self {
        self.zip_with(self, |a, _| !a)
    }

    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a && b)
    }

    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a || b)
    }

    /// `self ∧ ¬other`
    #[must_use]
    pub fn and_not(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a && !b)
    }

    /// Есть ли пиксель, отмеченный в обеих масках
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.data.iter().zip(&other.data).any(|(&a, &b)| a && b)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(bool, bool) -> bool) -> Self {
        debug_assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "mask size mismatch"
        );
        Self {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}

/// Карта провинций — для каждого пикселя хранит `province_id` или [`UNASSIGNED`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvinceMap {
    /// Ширина карты в пикселях
    pub width: u32,

    /// Высота карты в пикселях
    pub height: u32,

    /// Данные карты: вектор размером `width × height`, индекс `y * width + x`
    pub data: Vec<i32>,
}

impl ProvinceMap {
    /// Пустая карта: все пиксели [`UNASSIGNED`]
    #[must_use]
    pub fn unassigned(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![UNASSIGNED; (width as usize) * (height as usize)],
        }
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> i32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    pub fn set(&mut self, x: u32, y: u32, id: i32) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = id;
    }

    /// Маска пикселей, уже отнесённых к провинции
    #[must_use]
    pub fn assigned_mask(&self) -> Mask {
        Mask {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&id| id >= 0).collect(),
        }
    }

    #[must_use]
    pub fn has_unassigned(&self) -> bool {
        self.data.contains(&UNASSIGNED)
    }

    /// Наибольший идентификатор на карте, если хоть один пиксель размечен
    #[must_use]
    pub fn max_id(&self) -> Option<i32> {
        self.data.iter().copied().filter(|&id| id >= 0).max()
    }
}
