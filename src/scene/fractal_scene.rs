//! The fractal owned by a running application
//!
//! The tree is rebuilt from scratch whenever its config changes.

use hyperfold_fractal::{generate_fractal, FractalConfig, FractalError, FractalTree, NodeKey};

use super::palette::{CellStyle, Pulse};

/// A generated fractal plus the config it came from
#[derive(Clone, Debug)]
pub struct FractalScene {
    config: FractalConfig,
    tree: FractalTree,
}

impl FractalScene {
    /// Generate the fractal for `config`
    pub fn new(config: FractalConfig) -> Result<Self, FractalError> {
        let tree = generate_fractal(&config)?;
        log::info!(
            "Built {} fractal with {} nodes ({} levels)",
            config.strategy.name(),
            tree.len(),
            config.max_depth
        );
        Ok(Self { config, tree })
    }

    pub fn config(&self) -> &FractalConfig {
        &self.config
    }

    pub fn tree(&self) -> &FractalTree {
        &self.tree
    }

    /// Regenerate if `config` differs from the current one
    ///
    /// Returns whether a rebuild happened. On error the previous tree is kept.
    pub fn rebuild_if_changed(&mut self, config: &FractalConfig) -> Result<bool, FractalError> {
        if *config == self.config {
            return Ok(false);
        }

        let tree = generate_fractal(config)?;
        log::info!(
            "Rebuilt {} fractal: {} -> {} nodes",
            config.strategy.name(),
            self.tree.len(),
            tree.len()
        );
        self.config = config.clone();
        self.tree = tree;
        Ok(true)
    }

    /// Colors for every grid cell at the given color phase
    ///
    /// Each style is keyed by the node that shows it: the cell's inner cube
    /// when it has one, the cell itself otherwise. Empty for non-grid trees.
    pub fn cell_styles(&self, pulse: &Pulse, color_phase: f64) -> Vec<(NodeKey, CellStyle)> {
        self.tree
            .roots()
            .iter()
            .filter_map(|key| {
                let cell = self.tree.get(*key)?;
                let lattice = cell.lattice?;
                let target = cell.children.first().copied().unwrap_or(*key);
                Some((target, pulse.cell_style(lattice.distance_from_center, color_phase)))
            })
            .collect()
    }
}
