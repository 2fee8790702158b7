/// State of one module while a symbol is being laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not yet assigned (free for data)
    #[default]
    Unset,
    /// Light module
    Light,
    /// Dark module
    Dark,
}

impl Module {
    /// Module for a boolean color (true = dark)
    pub fn from_dark(dark: bool) -> Self {
        if dark { Module::Dark } else { Module::Light }
    }
}

/// Square grid of tri-state modules, addressed by (row, col)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    cells: Vec<Module>,
}

impl ModuleMatrix {
    /// Create a matrix with every module unset
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Module::Unset; size * size],
        }
    }

    /// Get matrix width (= height)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get module at (row, col); out of bounds reads as light
    pub fn get(&self, row: usize, col: usize) -> Module {
        if row >= self.size || col >= self.size {
            return Module::Light;
        }
        self.cells[row * self.size + col]
    }

    /// Set module at (row, col); out of bounds writes are ignored
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        if row >= self.size || col >= self.size {
            return;
        }
        self.cells[row * self.size + col] = Module::from_dark(dark);
    }

    /// Whether (row, col) is already assigned
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != Module::Unset
    }

    /// Whether (row, col) is dark (unset reads as light)
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Module::Dark
    }

    /// Count of dark modules
    pub fn dark_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m == Module::Dark).count()
    }

    /// Count of unset modules
    pub fn unset_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m == Module::Unset).count()
    }

    /// Freeze into row-major booleans (true = dark).
    ///
    /// Returns the (row, col) of the first unset module if any remain.
    pub fn into_modules(self) -> Result<Vec<bool>, (usize, usize)> {
        if let Some(idx) = self.cells.iter().position(|&m| m == Module::Unset) {
            return Err((idx / self.size, idx % self.size));
        }
        Ok(self.cells.into_iter().map(|m| m == Module::Dark).collect())
    }
}
