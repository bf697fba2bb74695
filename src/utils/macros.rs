/// Adds a `to_dict()` method to a serializable pyclass.
#[macro_export]
macro_rules! impl_to_dict {
    ($t:ty) => {
        #[pymethods]
        impl $t {
            fn to_dict(&self, py: Python) -> PyResult<Py<PyAny>> {
                Ok(pythonize::pythonize(py, self)?.unbind())
            }
        }
    };
}
