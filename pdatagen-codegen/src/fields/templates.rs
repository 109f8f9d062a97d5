//! Go template text for field accessors and their tests.

pub(crate) const ACCESSOR_SLICE: &str = r#"// ${fieldName} returns the ${originFieldName} associated with this ${structName}.
//
// Important: This causes a runtime error if IsNil() returns "true".
func (ms ${structName}) ${fieldName}() ${returnType} {
	return new${returnType}(&(*ms.orig).${originFieldName})
}"#;

pub(crate) const ACCESSOR_SLICE_TEST: &str = r#"func Test${structName}_${fieldName}(t *testing.T) {
	ms := New${structName}()
	ms.InitEmpty()
	assert.EqualValues(t, New${returnType}(), ms.${fieldName}())
	fillTest${returnType}(ms.${fieldName}())
	testVal${fieldName} := generateTest${returnType}()
	assert.EqualValues(t, testVal${fieldName}, ms.${fieldName}())
}"#;

pub(crate) const ACCESSOR_MESSAGE_PTR: &str = r#"// ${fieldName} returns the ${lowerFieldName} associated with this ${structName}.
// If no ${lowerFieldName} available, it creates an empty message and associates it with this ${structName}.
//
//  Empty initialized ${structName} will return "nil" ${returnType}.
//
// Important: This causes a runtime error if IsNil() returns "true".
func (ms ${structName}) ${fieldName}() ${returnType} {
	return new${returnType}(&(*ms.orig).${originFieldName})
}"#;

pub(crate) const ACCESSOR_MESSAGE_PTR_TEST: &str = r#"func Test${structName}_${fieldName}(t *testing.T) {
	ms := New${structName}()
	ms.InitEmpty()
	assert.True(t, ms.${fieldName}().IsNil())
	ms.${fieldName}().InitEmpty()
	assert.False(t, ms.${fieldName}().IsNil())
	fillTest${returnType}(ms.${fieldName}())
	assert.EqualValues(t, generateTest${returnType}(), ms.${fieldName}())
}"#;

pub(crate) const ACCESSOR_MESSAGE_VALUE: &str = r#"// ${fieldName} returns the ${lowerFieldName} associated with this ${structName}.
//
// Important: This causes a runtime error if IsNil() returns "true".
func (ms ${structName}) ${fieldName}() ${returnType} {
	return new${returnType}(&(*ms.orig).${originFieldName})
}"#;

pub(crate) const ACCESSOR_MESSAGE_VALUE_TEST: &str = r#"func Test${structName}_${fieldName}(t *testing.T) {
	ms := New${structName}()
	ms.InitEmpty()
	fillTest${returnType}(ms.${fieldName}())
	assert.EqualValues(t, generateTest${returnType}(), ms.${fieldName}())
}"#;

pub(crate) const ACCESSOR_PRIMITIVE: &str = r#"// ${fieldName} returns the ${lowerFieldName} associated with this ${structName}.
//
// Important: This causes a runtime error if IsNil() returns "true".
func (ms ${structName}) ${fieldName}() ${returnType} {
	return (*ms.orig).${originFieldName}
}

// Set${fieldName} replaces the ${lowerFieldName} associated with this ${structName}.
//
// Important: This causes a runtime error if IsNil() returns "true".
func (ms ${structName}) Set${fieldName}(v ${returnType}) {
	(*ms.orig).${originFieldName} = v
}"#;

pub(crate) const ACCESSOR_PRIMITIVE_TEST: &str = r#"func Test${structName}_${fieldName}(t *testing.T) {
	ms := New${structName}()
	ms.InitEmpty()
	assert.EqualValues(t, ${defaultVal}, ms.${fieldName}())
	testVal${fieldName} := ${testValue}
	ms.Set${fieldName}(testVal${fieldName})
	assert.EqualValues(t, testVal${fieldName}, ms.${fieldName}())
}"#;

pub(crate) const ACCESSOR_PRIMITIVE_TYPED: &str = r#"// ${fieldName} returns the ${lowerFieldName} associated with this ${structName}.
//
// Important: This causes a runtime error if IsNil() returns "true".
func (ms ${structName}) ${fieldName}() ${returnType} {
	return ${returnType}((*ms.orig).${originFieldName})
}

// Set${fieldName} replaces the ${lowerFieldName} associated with this ${structName}.
//
// Important: This causes a runtime error if IsNil() returns "true".
func (ms ${structName}) Set${fieldName}(v ${returnType}) {
	(*ms.orig).${originFieldName} = ${rawType}(v)
}"#;

pub(crate) const ACCESSOR_PRIMITIVE_TYPED_GETTER_ONLY: &str = r#"// ${fieldName} returns the ${lowerFieldName} associated with this ${structName}.
//
// Important: This causes a runtime error if IsNil() returns "true".
func (ms ${structName}) ${fieldName}() ${returnType} {
	return ${returnType}((*ms.orig).${originFieldName})
}"#;
