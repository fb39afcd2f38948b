use crate::chart::figure::Figure;
use crate::error::Error;
use log::trace;

/* # interactive state */

/// current parameter set plus the figure computed from it
///
/// every change rebuilds the figure wholesale through a single pure
/// function, so the initial render and every interactive update share one
/// implementation of the underlying formulas; a failed rebuild leaves the
/// previously displayed figure untouched
pub struct App<P> {
    params: P,
    rebuild: fn(&P) -> Result<Figure, Error>,
    figure: Figure,
    staged: bool,
}

impl<P: Clone> App<P> {
    pub fn new(params: P, rebuild: fn(&P) -> Result<Figure, Error>) -> Result<Self, Error> {
        let figure = rebuild(&params)?;
        Ok(Self {
            params,
            rebuild,
            figure,
            staged: false,
        })
    }

    pub fn params(&self) -> &P {
        &self.params
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// apply one parameter edit and recompute synchronously
    pub fn update(&mut self, edit: impl FnOnce(&mut P)) -> Result<(), Error> {
        let mut params = self.params.clone();
        edit(&mut params);
        let figure = (self.rebuild)(&params)?;
        self.params = params;
        self.figure = figure;
        self.staged = false;
        Ok(())
    }

    /// record a parameter edit without recomputing; rapid slider drags
    /// coalesce into a single commit
    pub fn stage(&mut self, edit: impl FnOnce(&mut P)) {
        edit(&mut self.params);
        self.staged = true;
    }

    /// recompute once for all staged edits
    pub fn commit(&mut self) -> Result<(), Error> {
        if self.staged {
            trace!("committing staged parameter edits");
            self.figure = (self.rebuild)(&self.params)?;
            self.staged = false;
        }
        Ok(())
    }
}
