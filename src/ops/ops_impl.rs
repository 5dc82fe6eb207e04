// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

/// Grid mutation helpers used by `apply_ops`. Keeps `ops::mod` focused on
/// public op types and orchestration.
fn apply_add_row(
    model: &mut DashboardModel,
    catalog: &Catalog,
    field_id: &FieldId,
) -> Result<(), ApplyError> {
    if model.rows().len() >= DashboardModel::MAX_ROWS {
        return Err(ApplyError::RowLimitReached {
            max: DashboardModel::MAX_ROWS,
        });
    }
    let field = lookup_field(catalog, field_id)?;
    model
        .rows_mut()
        .push(DataPointRow::from_points(vec![DataPoint::from_field(field)]));
    Ok(())
}

fn apply_add_data_point(
    model: &mut DashboardModel,
    catalog: &Catalog,
    row: usize,
    field_id: &FieldId,
) -> Result<(), ApplyError> {
    let field = lookup_field(catalog, field_id)?;
    let Some(target) = model.rows_mut().get_mut(row) else {
        return Err(ApplyError::RowNotFound { row });
    };
    if target.len() >= DashboardModel::MAX_DATA_POINTS_PER_ROW {
        return Err(ApplyError::RowFull {
            row,
            max: DashboardModel::MAX_DATA_POINTS_PER_ROW,
        });
    }
    target.data_points_mut().push(DataPoint::from_field(field));
    Ok(())
}

fn apply_remove_row(model: &mut DashboardModel, row: usize) -> Result<(), ApplyError> {
    if row >= model.rows().len() {
        return Err(ApplyError::RowNotFound { row });
    }
    model.rows_mut().remove(row);
    Ok(())
}

fn apply_remove_data_point(
    model: &mut DashboardModel,
    row: usize,
    col: usize,
) -> Result<(), ApplyError> {
    let Some(target) = model.rows_mut().get_mut(row) else {
        return Err(ApplyError::RowNotFound { row });
    };
    if col >= target.len() {
        return Err(ApplyError::DataPointNotFound { row, col });
    }
    // The row itself stays, even when this was its last point.
    target.data_points_mut().remove(col);
    Ok(())
}

fn apply_move_row(model: &mut DashboardModel, from: usize, to: usize) -> Result<(), ApplyError> {
    let len = model.rows().len();
    if from >= len {
        return Err(ApplyError::RowNotFound { row: from });
    }
    if to >= len {
        return Err(ApplyError::InvalidMoveTarget { index: to, len });
    }
    if from != to {
        let moved = model.rows_mut().remove(from);
        model.rows_mut().insert(to, moved);
    }
    Ok(())
}

fn apply_move_data_point(
    model: &mut DashboardModel,
    from_row: usize,
    from_col: usize,
    to_row: usize,
    to_col: usize,
) -> Result<(), ApplyError> {
    let Some(source) = model.rows().get(from_row) else {
        return Err(ApplyError::RowNotFound { row: from_row });
    };
    if from_col >= source.len() {
        return Err(ApplyError::DataPointNotFound {
            row: from_row,
            col: from_col,
        });
    }

    if from_row == to_row {
        let len = source.len();
        if to_col >= len {
            return Err(ApplyError::InvalidMoveTarget { index: to_col, len });
        }
        if from_col != to_col {
            let points = model
                .rows_mut()
                .get_mut(from_row)
                .expect("source row checked above")
                .data_points_mut();
            let moved = points.remove(from_col);
            points.insert(to_col, moved);
        }
        return Ok(());
    }

    let Some(target) = model.rows().get(to_row) else {
        return Err(ApplyError::RowNotFound { row: to_row });
    };
    if target.len() >= DashboardModel::MAX_DATA_POINTS_PER_ROW {
        return Err(ApplyError::RowFull {
            row: to_row,
            max: DashboardModel::MAX_DATA_POINTS_PER_ROW,
        });
    }
    // Insertion index, so the target row's length itself is a legal target.
    if to_col > target.len() {
        return Err(ApplyError::InvalidMoveTarget {
            index: to_col,
            len: target.len(),
        });
    }

    let moved = model
        .rows_mut()
        .get_mut(from_row)
        .expect("source row checked above")
        .data_points_mut()
        .remove(from_col);
    model
        .rows_mut()
        .get_mut(to_row)
        .expect("target row checked above")
        .data_points_mut()
        .insert(to_col, moved);
    Ok(())
}

fn apply_set_display_name(
    model: &mut DashboardModel,
    row: usize,
    col: usize,
    display_name: &str,
) -> Result<(), ApplyError> {
    if let Err(reason) = validate_display_name(display_name) {
        return Err(ApplyError::InvalidDisplayName {
            display_name: display_name.to_owned(),
            reason,
        });
    }
    let point = point_mut(model, row, col)?;
    point.set_display_name(display_name.to_owned());
    Ok(())
}

fn apply_set_source_field(
    model: &mut DashboardModel,
    catalog: &Catalog,
    row: usize,
    col: usize,
    field_id: &FieldId,
) -> Result<(), ApplyError> {
    let field = lookup_field(catalog, field_id)?;
    let point = point_mut(model, row, col)?;

    // The display name always follows the new field; catalog names are
    // trusted and bypass the typed-name rule.
    point.set_display_name(field.display_name().to_owned());
    if !field.has_unit(point.output_unit()) {
        point.set_output_unit(field.default_unit());
    }
    point.set_field_id(field.field_id().clone());
    Ok(())
}

fn apply_set_output_unit(
    model: &mut DashboardModel,
    catalog: &Catalog,
    row: usize,
    col: usize,
    unit: Unit,
) -> Result<(), ApplyError> {
    let bound = point_ref(model, row, col)?.field_id().clone();
    let field = lookup_field(catalog, &bound)?;
    if !field.has_unit(unit) {
        return Err(ApplyError::UnitNotAvailable {
            field_id: bound,
            unit,
        });
    }
    point_mut(model, row, col)?.set_output_unit(unit);
    Ok(())
}

fn apply_set_color_scale(
    model: &mut DashboardModel,
    row: usize,
    col: usize,
    color_scale: &ColorScale,
) -> Result<(), ApplyError> {
    let point = point_mut(model, row, col)?;
    point.set_color_scale(color_scale.clone());
    Ok(())
}

fn lookup_field<'a>(
    catalog: &'a Catalog,
    field_id: &FieldId,
) -> Result<&'a SourceField, ApplyError> {
    catalog.field(field_id).ok_or_else(|| ApplyError::UnknownField {
        field_id: field_id.clone(),
    })
}

fn point_ref(model: &DashboardModel, row: usize, col: usize) -> Result<&DataPoint, ApplyError> {
    let Some(target) = model.rows().get(row) else {
        return Err(ApplyError::RowNotFound { row });
    };
    target
        .data_points()
        .get(col)
        .ok_or(ApplyError::DataPointNotFound { row, col })
}

fn point_mut(
    model: &mut DashboardModel,
    row: usize,
    col: usize,
) -> Result<&mut DataPoint, ApplyError> {
    let Some(target) = model.rows_mut().get_mut(row) else {
        return Err(ApplyError::RowNotFound { row });
    };
    target
        .data_points_mut()
        .get_mut(col)
        .ok_or(ApplyError::DataPointNotFound { row, col })
}
